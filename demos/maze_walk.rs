use gridpath::{Algorithm, Cell, Grid};

// Carves a seeded maze, prints it, and lets every strategy race through
// it. In a perfect maze they all discover the same unique route.
fn main() -> gridpath::Result<()> {
    let grid = Grid::generate_maze(31, Cell::new(0, 0), Some(7))?;
    println!("{}", grid);
    println!("Carved {} open cells", grid.maze_history().len());
    let start = Cell::new(0, 0);
    let goal = Cell::new(30, 30);
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&grid, start, goal)?;
        match result.path() {
            Some(path) => println!(
                "{}: route of {} cells, {} expanded",
                algorithm,
                path.len(),
                result.visited().len()
            ),
            None => println!(
                "{}: no route, {} expanded",
                algorithm,
                result.visited().len()
            ),
        }
    }
    Ok(())
}
