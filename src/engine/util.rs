use chrono::{Datelike, Duration, NaiveDate};

/// Tous les jours du mois, croissants, week-ends compris.
/// `None` si le couple année/mois n'existe pas dans le calendrier.
pub(super) fn month_days(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut out = Vec::with_capacity(31);
    let mut cur = first;
    while cur.month() == month {
        out.push(cur);
        cur = cur.succ_opt()?;
    }
    Some(out)
}

/// Lundi de la semaine contenant `d`.
pub(super) fn monday_of(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_monday()))
}

/// Index 0-based de la semaine (ancrée lundi) de `d`, compté depuis le lundi
/// de référence du mois. Toute l'alternance de rotation se clé là-dessus.
pub(super) fn relative_week(base_monday: NaiveDate, d: NaiveDate) -> i64 {
    (monday_of(d) - base_monday).num_days() / 7
}
