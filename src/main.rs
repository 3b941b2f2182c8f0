use dotenv::dotenv;
use lineroute::{CircularLine, Line, LinearLine, Route, RoutePlanner};

fn show(route: Option<Route>) -> String {
    match route {
        Some(route) => format!("[{route}] ({})", route.direction()),
        None => "no route".to_string(),
    }
}

fn main() -> lineroute::Result<()> {
    // Load `.env` file, if one exists
    dotenv().ok();

    #[cfg(feature = "tracing")]
    lineroute::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let mut red = LinearLine::new("Red");
    red.add_stations(["A1", "A2", "A3", "A4", "A5", "A6"])?;

    let mut circle = CircularLine::new("Loop");
    circle.add_stations(["C1", "C2", "C3", "C4", "C5", "C6"])?;

    let planner = RoutePlanner::new();

    println!("Linear A2->A5: {}", show(planner.plan(&red, "A2", "A5")?));

    red.mark_negative("A4", true)?;
    println!("A2->A5 with A4 NEG: {}", show(planner.plan(&red, "A2", "A5")?));

    red.mark_negative("A4", false)?;
    println!("A2->A5 restored: {}", show(planner.plan(&red, "A2", "A5")?));

    println!("Circular C6->C3: {}", show(planner.plan(&circle, "C6", "C3")?));

    circle.mark_negative("C2", true)?;
    println!("C6->C3 with C2 NEG: {}", show(planner.plan(&circle, "C6", "C3")?));

    Ok(())
}
