// console.rs - Terminal preparation before drawing ANSI frames

use std::io;

/// Turns on escape-sequence handling for stdout. crossterm switches on virtual
/// terminal processing for Windows consoles; everything else already has it.
#[cfg(target_os = "windows")]
pub fn enable_ansi() -> io::Result<()> {
    if crossterm::ansi_support::supports_ansi() {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::Unsupported, "console does not accept ANSI escapes"))
    }
}

#[cfg(not(target_os = "windows"))]
pub fn enable_ansi() -> io::Result<()> {
    Ok(())
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    #[test]
    fn ansi_is_always_available_off_windows() {
        assert!(super::enable_ansi().is_ok());
    }
}
