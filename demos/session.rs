use polycalc::{Calculator, Operation};

fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = simplelog::ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    let config = cb.build();

    TermLogger::init(l, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn main() {
    if let Err(e) = init_simple_logger(log::LevelFilter::Debug) {
        eprintln!("logger: {e}");
    }

    let mut calc = Calculator::new();
    if let Err(err) = calc.set_operands("3x^2 + 2x - 5", Some("x^2 - 1")) {
        eprintln!("{err}");
        return;
    }

    calc.enqueue_add();
    calc.enqueue(Operation::AddTerm {
        coefficient: -4.0,
        degree: 3,
    });
    calc.enqueue(Operation::SortAscending);
    for line in calc.pending() {
        println!("pending: {line}");
    }

    calc.process_all();
    println!("result: {}", calc.result_text());

    calc.undo();
    println!("after undo: {}", calc.result_text());
    for line in calc.history() {
        println!("history: {line}");
    }
}
