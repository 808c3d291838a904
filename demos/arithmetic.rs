use polycalc::{Polynomial, pretty};

fn parse(input: &str) -> Polynomial {
    Polynomial::parse(input).unwrap_or_else(|e| panic!("Failed to parse {input}: {e}"))
}

fn main() {
    let a = parse("3x^2 + 2x - 5");
    let b = parse("x^2 - 1");
    println!("({}) + ({}) = {}", pretty(&a), pretty(&b), pretty(&(&a + &b)));
    println!("({}) - ({}) = {}", pretty(&a), pretty(&b), pretty(&(&a - &b)));
    println!("p(2) = {}", a.evaluate(2.0));
}
