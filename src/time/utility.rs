
#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 2 && is_leap(year) {
        29
    } else {
        EOM[month as usize]
    }
}
