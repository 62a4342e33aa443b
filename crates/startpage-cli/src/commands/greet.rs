use startpage_core::Dashboard;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dash = Dashboard::open()?;
    println!("{}", dash.greeting());
    Ok(())
}
