use crate::holiday::holiday::Holiday;

const FIXED_DATES: [(u32, u32, &str); 8] = [
    (1, 1, "Confraternização Universal"),
    (4, 21, "Dia de Tiradentes"),
    (5, 1, "Dia do Trabalhador"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Dia de Nossa Senhora Aparecida"),
    (11, 2, "Dia de Finados"),
    (11, 15, "Proclamação da República do Brasil"),
    (12, 25, "Natal"),
];

// National holiday since law 14.759/2023.
const CONSCIENCIA_NEGRA_FIRST_YEAR: i32 = 2024;

/// The holidays falling on the same month and day every year: eight of them,
/// nine from 2024 on.
pub fn fixed_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = FIXED_DATES
        .iter()
        .map(|&(month, day, name)| {
            Holiday::new(format!("{year}-{month:02}-{day:02}"), name)
        })
        .collect();

    if year >= CONSCIENCIA_NEGRA_FIRST_YEAR {
        holidays.push(Holiday::new(
            format!("{year}-11-20"),
            "Dia da Consciência Negra",
        ));
    }

    holidays
}
