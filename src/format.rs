//! ISO 8601 formatting built on `writeable`.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDateTime, offset::UtcOffset};

/// A formattable local date-time with its UTC offset, for example
/// `2026-01-15T10:30:00+01:00`.
#[derive(Debug)]
pub(crate) struct FormattableInstant {
    pub(crate) date: FormattableDate,
    pub(crate) time: FormattableTime,
    pub(crate) offset: FormattableOffset,
}

impl FormattableInstant {
    pub(crate) fn new(iso: IsoDateTime, offset: UtcOffset) -> Self {
        let (hour, minute, second) = offset.to_hms();
        Self {
            date: FormattableDate(iso.date.year, iso.date.month, iso.date.day),
            time: FormattableTime {
                hour: iso.time.hour,
                minute: iso.time.minute,
                second: iso.time.second,
                nanosecond: iso.time.nanosecond,
            },
            offset: FormattableOffset {
                negative: offset.is_negative(),
                hour,
                minute,
                second,
            },
        }
    }
}

impl Writeable for FormattableInstant {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)?;
        self.offset.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date.writeable_length_hint()
            + 1
            + self.time.writeable_length_hint()
            + self.offset.writeable_length_hint()
    }
}

#[derive(Debug)]
pub(crate) struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

#[derive(Debug)]
pub(crate) struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        if self.nanosecond == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        let (digits, precision) = u32_to_digits(self.nanosecond);
        for digit in digits.iter().take(precision) {
            digit.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.nanosecond == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 18)
    }
}

/// A `±HH:MM` offset, with `:SS` appended for sub-minute offsets.
#[derive(Debug)]
pub(crate) struct FormattableOffset {
    pub negative: bool,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char(if self.negative { '-' } else { '+' })?;
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        if self.second != 0 {
            sink.write_char(':')?;
            write_padded_u8(self.second, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.second != 0 {
            LengthHint::exact(9)
        } else {
            LengthHint::exact(6)
        }
    }
}

impl_display_with_writeable!(FormattableInstant);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableOffset);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Returns the nine sub-second digits and the number of significant digits.
fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        let mut y = year;
        for divisor in [1_000, 100, 10] {
            (y / divisor).write_to(sink)?;
            y %= divisor;
        }
        y.write_to(sink)
    } else {
        // Expanded years are always signed and six digits wide.
        sink.write_char(if year < 0 { '-' } else { '+' })?;
        let (digits, _) = u32_to_digits(year.unsigned_abs());
        for digit in digits.iter().skip(3) {
            digit.write_to(sink)?;
        }
        Ok(())
    }
}
