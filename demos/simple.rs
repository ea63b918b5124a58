use gridpath::{astar, Cell, CellState, Grid, Heuristic};

// In this example a route is found on a board with shape
// S..#.
// .#.#.
// .#.#.
// .#...
// .#..G
// S marks the start, G the goal, # the walls.
fn main() -> gridpath::Result<()> {
    let rows: Vec<Vec<CellState>> = [
        "...#.", //
        ".#.#.",
        ".#.#.",
        ".#...",
        ".#...",
    ]
    .iter()
    .map(|row| {
        row.chars()
            .map(|glyph| {
                if glyph == '#' {
                    CellState::Wall
                } else {
                    CellState::Open
                }
            })
            .collect()
    })
    .collect();
    let grid = Grid::from_cells(&rows)?;
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);
    let result = astar(&grid, start, goal, Heuristic::Manhattan)?;
    println!("{}", grid);
    match result.path() {
        Some(path) => {
            println!(
                "A route of {} cells was found after expanding {}:",
                path.len(),
                result.visited().len()
            );
            for cell in path {
                println!("{}", cell);
            }
        }
        None => println!("No route from {} to {}", start, goal),
    }
    Ok(())
}
