//! Common constants used throughout embedsmith.

/// Name of the configuration record written at the project root
pub const METADATA_FILE: &str = "embedsmith.json";

/// File extension of template files
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// Project path used when none is given
pub const DEFAULT_PROJECT_PATH: &str = "embedded-project";

/// Licenses accepted by `--license`
pub const LICENSES: [&str; 5] = ["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause", "Proprietary"];

/// File name patterns of generated files that get the executable bit
pub const SCRIPT_PATTERNS: [&str; 4] = ["*.py", "*.sh", "*flash_tool*", "*debug_tool*"];

/// MCU presets shown by `--list-presets`
pub const MCU_PRESETS: [(&str, &str); 6] = [
    ("cortex-m0", "ARM Cortex-M0 (entry-level)"),
    ("cortex-m3", "ARM Cortex-M3 (mainstream)"),
    ("cortex-m4", "ARM Cortex-M4 (DSP capabilities)"),
    ("cortex-m7", "ARM Cortex-M7 (high-performance)"),
    ("cortex-m33", "ARM Cortex-M33 (security features)"),
    ("riscv-rv32", "RISC-V RV32 (open architecture)"),
];
