//! CPU architecture types and utilities.

/// CPU architecture of the distribution host.
///
/// Detected once when settings are built and carried on the descriptor. It
/// drives the `32`/`64` suffix of Windows archive names and the `--arch`
/// passed to native module builds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARM (32-bit)
    Arm,
}

impl Arch {
    /// Detects the host architecture.
    ///
    /// A 32-bit process on 64-bit Windows (WOW64) reports
    /// `PROCESSOR_ARCHITEW6432`; that host counts as 64-bit.
    pub fn detect_host() -> Self {
        let wow64 = std::env::var_os("PROCESSOR_ARCHITEW6432").is_some();
        Self::from_host(std::env::consts::ARCH, wow64)
    }

    /// Maps a Rust `target_arch` name, widening x86 under WOW64.
    pub fn from_host(rust_arch: &str, wow64: bool) -> Self {
        match rust_arch {
            "x86_64" => Arch::X86_64,
            "x86" if wow64 => Arch::X86_64,
            "x86" => Arch::X86,
            "aarch64" => Arch::AArch64,
            "arm" => Arch::Arm,
            other => {
                log::warn!("Unknown host architecture {}, assuming x86_64", other);
                Arch::X86_64
            }
        }
    }

    /// Whether this is a 64-bit architecture.
    pub fn is_64_bit(self) -> bool {
        matches!(self, Arch::X86_64 | Arch::AArch64)
    }

    /// Word size suffix used in Windows archive names.
    pub fn bits(self) -> &'static str {
        if self.is_64_bit() { "64" } else { "32" }
    }

    /// Architecture name understood by `node-gyp`.
    pub fn node_arch(self) -> &'static str {
        match self {
            Arch::X86_64 => "x64",
            Arch::X86 => "ia32",
            Arch::AArch64 => "arm64",
            Arch::Arm => "arm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wow64_counts_as_64_bit() {
        assert_eq!(Arch::from_host("x86", true), Arch::X86_64);
        assert_eq!(Arch::from_host("x86", false).bits(), "32");
        assert_eq!(Arch::from_host("x86_64", false).bits(), "64");
    }

    #[test]
    fn test_node_arch_names() {
        assert_eq!(Arch::X86.node_arch(), "ia32");
        assert_eq!(Arch::AArch64.node_arch(), "arm64");
    }
}
