//! Prints the union, intersection and difference of two interval lists.

use qtty::Second;
use interval_sweep::{boolean, BooleanOp, Interval};

fn print_line(label: &str, intervals: &[Interval<Second>]) {
    let formatted: String = intervals.iter().map(|interval| format!("{interval} ")).collect();
    println!("{label}: {formatted}");
}

fn main() {
    let left = vec![Interval::<Second>::from_f64(1.0, 5.0), Interval::from_f64(6.0, 9.0)];
    let right = vec![Interval::<Second>::from_f64(1.0, 5.0), Interval::from_f64(6.0, 9.0)];

    print_line("Left", &left);
    print_line("Right", &right);
    println!();

    for (label, op) in [
        ("Union", BooleanOp::Union),
        ("Intersection", BooleanOp::Intersection),
        ("Difference", BooleanOp::Difference),
    ] {
        print_line(label, &boolean(op, &left, &right));
    }
}
