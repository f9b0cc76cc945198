//! Reservation listings and the single-reservation detail card.

use itertools::Itertools;

use crate::{
    error::InvalidSelection,
    fmt::{ClockTime, FinnishDate},
    quantity::cost::Euros,
    record::Reservation,
    store::RecordStore,
};

/// Composed reservation report: confirmed listing, long reservations,
/// per-reservation status, counts, and the confirmed total income.
#[derive(bon::Builder)]
pub struct ReservationReport<'a> {
    pub store: &'a RecordStore<Reservation>,

    /// Minimum duration, in hours, for the "long reservations" section.
    #[builder(default = 3)]
    pub long_threshold_hours: u32,
}

impl ReservationReport<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let mut sections = Vec::new();
        sections.push(self.confirmed_section());
        sections.push(self.long_section());
        sections.push(self.status_section());
        sections.push(self.count_section());
        sections.push(self.income_section());
        sections.join("\n")
    }

    fn confirmed_section(&self) -> String {
        let mut lines = vec!["1) Vahvistetut varaukset".to_string()];
        for reservation in self.store.iter().filter(|reservation| reservation.confirmed) {
            lines.push(format!(
                "- {}, {}, {} klo {}",
                reservation.name,
                reservation.venue,
                FinnishDate(reservation.date),
                ClockTime(reservation.start_time),
            ));
        }
        lines.push(String::new());
        lines.join("\n")
    }

    fn long_section(&self) -> String {
        let mut lines =
            vec![format!("2) Pitkät varaukset (≥ {} h)", self.long_threshold_hours)];
        for reservation in self
            .store
            .iter()
            .filter(|reservation| reservation.duration_hours >= self.long_threshold_hours)
        {
            lines.push(format!(
                "- {}, {} klo {}, kesto {} h, {}",
                reservation.name,
                FinnishDate(reservation.date),
                ClockTime(reservation.start_time),
                reservation.duration_hours,
                reservation.venue,
            ));
        }
        lines.push(String::new());
        lines.join("\n")
    }

    fn status_section(&self) -> String {
        let mut lines = vec!["3) Varausten vahvistusstatus".to_string()];
        for reservation in self.store.iter() {
            let status = if reservation.confirmed { "Vahvistettu" } else { "EI vahvistettu" };
            lines.push(format!("{} → {status}", reservation.name));
        }
        lines.push(String::new());
        lines.join("\n")
    }

    fn count_section(&self) -> String {
        let counts = self.store.iter().counts_by(|reservation| reservation.confirmed);
        format!(
            "4) Yhteenveto vahvistuksista\n\
             - Vahvistettuja varauksia: {} kpl\n\
             - Ei-vahvistettuja varauksia: {} kpl\n",
            counts.get(&true).copied().unwrap_or_default(),
            counts.get(&false).copied().unwrap_or_default(),
        )
    }

    fn income_section(&self) -> String {
        let income: Euros = self
            .store
            .iter()
            .filter(|reservation| reservation.confirmed)
            .map(Reservation::total_price)
            .sum();
        format!(
            "5) Vahvistettujen varausten kokonaistulot\n\
             Vahvistettujen varausten kokonaistulot: {income}\n",
        )
    }
}

/// Detail card for one reservation, looked up by its id.
pub fn detail_for(store: &RecordStore<Reservation>, id: u32) -> Result<String, InvalidSelection> {
    let reservation = store
        .iter()
        .find(|reservation| reservation.id == id)
        .ok_or_else(|| InvalidSelection(format!("no reservation with id {id}")))?;
    Ok(detail_card(reservation))
}

fn detail_card(reservation: &Reservation) -> String {
    let paid = if reservation.confirmed { "Kyllä" } else { "Ei" };
    format!(
        "Varausnumero: {}\n\
         Varaaja: {}\n\
         Päivämäärä: {}\n\
         Aloitusaika: {}\n\
         Tuntimäärä: {}\n\
         Loppumisaika: {}\n\
         Tuntihinta: {}\n\
         Kokonaishinta: {}\n\
         Maksettu: {paid}\n\
         Kohde: {}\n\
         Puhelin: {}\n\
         Sähköposti: {}\n",
        reservation.id,
        reservation.name,
        FinnishDate(reservation.date),
        ClockTime(reservation.start_time),
        reservation.duration_hours,
        ClockTime(reservation.end_time()),
        reservation.hourly_rate,
        reservation.total_price(),
        reservation.venue,
        reservation.phone,
        reservation.email,
    )
}
