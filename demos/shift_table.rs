use fast_shift_rs::{left, right, table, OPTIMIZED};

fn main() {
    let value: u32 = 33_333;
    println!("optimised shifts: {}", if OPTIMIZED { "on" } else { "off" });
    println!("{:>3}  {:<18} {:<18} {:>12} {:>12}", "d", "left", "right", "v << d", "v >> d");

    for d in 0u8..32 {
        println!(
            "{:>3}  {:<18} {:<18} {:>12} {:>12}",
            d,
            table::left(d).to_string(),
            table::right(d).to_string(),
            left::lshift(value, d),
            right::rshift(value, d),
        );
    }
}
