//! Process exit codes. Scripts depend on these values.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2; // Rejected options or range
pub const EXIT_IO_ERROR: i32 = 3; // Input unreadable or output unwritable
