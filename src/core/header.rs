//! Header rendering
//!
//! Every emitted line starts with a header built into the logger's reusable
//! buffer: `YYYY/MM/DD HH:MM:SS.ssssss - [LEVEL, tag1, tag2] - path:line: `.
//! Date, time and caller parts are selected by [`Flags`].

use chrono::{DateTime, Datelike, Local, Timelike};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset selecting which header fields are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// `01:23:23.123123`, implies TIME
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Path after the first `/src/` segment
    pub const LONGFILE: Flags = Flags(1 << 3);
    /// Final path segment only; overrides LONGFILE
    pub const SHORTFILE: Flags = Flags(1 << 4);

    pub const DEFAULT: Flags = Flags(Self::DATE.0 | Self::MICROSECONDS.0 | Self::LONGFILE.0);

    const NAMES: [(&'static str, Flags); 5] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONGFILE),
        ("shortfile", Flags::SHORTFILE),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Flags {
        Flags(bits)
    }

    /// True if every bit of `other` is set
    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set
    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the caller's file and line have to be resolved
    #[inline]
    pub const fn wants_caller(self) -> bool {
        self.intersects(Flags(Self::LONGFILE.0 | Self::SHORTFILE.0))
    }

    /// Look up a single flag by its lowercase name
    pub fn from_name(name: &str) -> Option<Flags> {
        let name = name.to_lowercase();
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::DEFAULT
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Append `value` as decimal ASCII, zero-padded to `width` digits.
///
/// A width of 0 writes the minimal number of digits.
pub(crate) fn itoa(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    // u64::MAX has 20 digits
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut remaining = width.min(digits.len());

    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        remaining = remaining.saturating_sub(1);
        if value == 0 && remaining == 0 {
            break;
        }
    }

    buf.extend_from_slice(&digits[pos..]);
}

/// Shorten a caller path according to the file flags
pub(crate) fn trim_path(file: &str, flags: Flags) -> &str {
    if flags.contains(Flags::SHORTFILE) {
        match file.rfind(|c: char| c == '/' || c == '\\') {
            Some(i) => &file[i + 1..],
            None => file,
        }
    } else {
        match file.find("/src/") {
            Some(i) => &file[i + "/src/".len()..],
            None => file,
        }
    }
}

/// Render the header of one line into `buf`.
///
/// `caller` is only rendered when a file flag is set.
pub(crate) fn write_header(
    buf: &mut Vec<u8>,
    now: &DateTime<Local>,
    flags: Flags,
    label: &str,
    tags: &[String],
    caller: Option<(&str, u32)>,
) {
    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        let mut wrote_date = false;
        if flags.contains(Flags::DATE) {
            itoa(buf, now.year().max(0) as u64, 4);
            buf.push(b'/');
            itoa(buf, now.month() as u64, 2);
            buf.push(b'/');
            itoa(buf, now.day() as u64, 2);
            wrote_date = true;
        }

        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            if wrote_date {
                buf.push(b' ');
            }
            itoa(buf, now.hour() as u64, 2);
            buf.push(b':');
            itoa(buf, now.minute() as u64, 2);
            buf.push(b':');
            itoa(buf, now.second() as u64, 2);
            if flags.contains(Flags::MICROSECONDS) {
                buf.push(b'.');
                itoa(buf, (now.nanosecond() / 1_000) as u64, 6);
            }
        }

        buf.extend_from_slice(b" - ");
    }

    buf.push(b'[');
    buf.extend_from_slice(label.as_bytes());
    for tag in tags {
        buf.extend_from_slice(b", ");
        buf.extend_from_slice(tag.as_bytes());
    }
    buf.extend_from_slice(b"] - ");

    if flags.wants_caller() {
        if let Some((file, line)) = caller {
            buf.extend_from_slice(trim_path(file, flags).as_bytes());
            buf.push(b':');
            itoa(buf, line as u64, 0);
            buf.extend_from_slice(b": ");
        }
    }
}
