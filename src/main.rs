use gridplot::driver::{Driver, SCRIPT_PATH};

fn main() {
    gridplot::log::init();

    let mut driver = Driver::default();
    if let Err(err) = driver.load_file(SCRIPT_PATH) {
        eprintln!("{:?}", miette::Report::new(err));
    }
    for diagnostic in driver.take_diagnostics() {
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }

    driver.run();
    print!("{}", driver.render());
}
