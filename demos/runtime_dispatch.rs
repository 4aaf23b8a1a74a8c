use fast_shift_rs::{Distance, ShiftError};

fn main() -> Result<(), ShiftError> {
    let value: u32 = 0x8235;
    // distances as wider integers, e.g. parsed from a config or a packet
    let requested: Vec<u32> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let requested = if requested.is_empty() { vec![5, 16, 21, 32] } else { requested };

    for raw in requested {
        let d = Distance::try_from(raw)?;
        println!(
            "{:#010x} << {:>3} = {:#010x}   >> {:>3} = {:#010x}   ({} / {})",
            value,
            d.get(),
            d.shl(value),
            d.get(),
            d.shr(value),
            d.left(),
            d.right(),
        );
    }
    Ok(())
}
