use anyhow::Context;
use std::io::Read;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

/// `$` amount with four decimals
pub fn format_currency(v: f64) -> String {
    format!("${v:.4}")
}

/// Integer with `,` every three digits
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_tokens(n: u64) -> String {
    format!("{}tok", format_thousands(n))
}

pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}
