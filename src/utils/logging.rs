// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use chrono::Local;
use colored::*;

pub fn log_header(title: &str) {
    println!("\n╔═══════════════[>GENERATOR<]════════════════╗");
    println!("║ [GOL] {}", title.bright_cyan().bold());
    println!("╠═══════════════[>PARAMETERS<]═══════════════╣");
}

pub fn log_metric(label: &str, value: impl std::fmt::Display) {
    println!("║ <{:_<16}> │ {:>20}",
        label.bright_cyan(),
        format!("[{}]", value).bright_white()
    );
}

pub fn log_success(message: &str) {
    println!("║ [//:DONE] >> {}", message.bright_green());
}

pub fn log_warning(message: &str) {
    println!("║ [WARN//FONT] >> {}", message.bright_yellow());
}

pub fn log_error(message: &str) {
    eprintln!("║ [ERR//FATAL] >> {}", message.bright_red());
}

pub fn log_info(message: &str) {
    println!("║ [INFO//STREAM] >> {}", message.cyan());
}

pub fn log_progress(frame: usize, total: usize, population: usize) {
    println!("║ [T:{}] Frame {}/{} {}",
        Local::now().format("%H:%M:%S.%3f").to_string().bright_cyan(),
        frame,
        total,
        format!("(population {})", population).dimmed()
    );
}

pub fn log_footer() {
    println!("╚════════════════[>STREAM.TERMINATED<]═══════════════╝\n");
}

pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

pub fn log_file_size(label: &str, bytes: u64) {
    log_metric(label, format_file_size(bytes));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_is_reported_in_mebibytes() {
        assert_eq!(format_file_size(0), "0.00 MB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 / 2), "1.50 MB");
    }
}
