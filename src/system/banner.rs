use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

const COLOR_START: (u8, u8, u8) = (0x80, 0x4c, 0xff);
const COLOR_END: (u8, u8, u8) = (0x3a, 0xa9, 0xff);

pub(crate) fn banner_lines() -> [String; 3] {
    [
        format!(
            "This is {}, Version {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ),
        format!("Copyright {}", env!("CARGO_PKG_AUTHORS")),
        format!("Licensed under {}", env!("CARGO_PKG_LICENSE")),
    ]
}

/// Prints the banner followed by a blank line.
pub(crate) fn print_cli_banner(no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    let lines = banner_lines();
    let denom = lines.len().saturating_sub(1);
    for (idx, line) in lines.iter().enumerate() {
        if use_color {
            let (r, g, b) = gradient_rgb(COLOR_START, COLOR_END, idx, denom);
            println!("{}", line.as_str().with(Color::Rgb { r, g, b }));
        } else {
            println!("{line}");
        }
    }
    println!();
}

fn gradient_rgb(start: (u8, u8, u8), end: (u8, u8, u8), idx: usize, denom: usize) -> (u8, u8, u8) {
    let denom = i32::try_from(denom.max(1)).unwrap_or(i32::MAX);
    let idx = i32::try_from(idx).unwrap_or(i32::MAX).min(denom);
    let lerp = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        let value = b
            .checked_sub(a)
            .and_then(|delta| delta.checked_mul(idx))
            .and_then(|scaled| scaled.checked_div(denom))
            .and_then(|step| a.checked_add(step))
            .unwrap_or(a);
        u8::try_from(value.clamp(0, 255)).unwrap_or(0)
    };
    (
        lerp(start.0, end.0),
        lerp(start.1, end.1),
        lerp(start.2, end.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_hits_both_endpoints() -> Result<(), String> {
        if gradient_rgb(COLOR_START, COLOR_END, 0, 2) != COLOR_START {
            return Err("Expected first line to use the start color".to_owned());
        }
        if gradient_rgb(COLOR_START, COLOR_END, 2, 2) != COLOR_END {
            return Err("Expected last line to use the end color".to_owned());
        }
        if gradient_rgb(COLOR_START, COLOR_END, 9, 2) != COLOR_END {
            return Err("Expected index past the end to clamp".to_owned());
        }
        Ok(())
    }

    #[test]
    fn banner_names_the_tool_and_version() -> Result<(), String> {
        let [name, _, license] = banner_lines();
        if !name.starts_with("This is loadprobe, Version ") {
            return Err(format!("Unexpected banner: {}", name));
        }
        if !license.contains("MIT") {
            return Err(format!("Unexpected license line: {}", license));
        }
        Ok(())
    }
}
