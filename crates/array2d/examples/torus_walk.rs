use array2d::{Array2D, Direction, GridConfig, Point};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cfg = GridConfig::load_default()?;
    let mut grid = Array2D::from_config(&cfg, '.')?;
    info!(%grid, torus = grid.is_torus(), "Grid ready");

    // Walk a square spiral, leaving a trail, and let the edges wrap
    let mut walker = Point::with_data((0, 0), '#');
    let mut steps = 1;
    for direction in Direction::ALL.iter().cycle().take(12) {
        for _ in 0..steps {
            let pos = walker.set_move(*direction, 1, Some(&grid))?;
            if let Some(mark) = walker.data() {
                grid.set_data(pos, *mark)?;
            }
        }
        steps += 1;
    }
    info!(%walker, "Walk finished");

    for row in 0..grid.rows() as i64 {
        let line: String = (0..grid.cols() as i64)
            .map(|col| grid.get_data((row, col)).copied())
            .collect::<Result<_, _>>()?;
        println!("{}", line);
    }
    println!("Trail covers {} cells", grid.data_locs(&'#').len());

    // Off a non-wrapping grid the same walk is refused at the edge
    let bounded = Array2D::new(cfg.rows, cfg.cols, '.', false)?;
    let mut p: Point<()> = Point::new((0, 0));
    if let Err(e) = p.set_move(Direction::Up, 1, Some(&bounded)) {
        println!("Bounded grid: {}", e);
    }

    Ok(())
}
