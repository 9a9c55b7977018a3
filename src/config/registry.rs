use crate::domain::model::Location;

const API_BASE: &str = "https://booking-api.mittvaccin.se/clinique";
const BOOKING_BASE: &str = "https://bokning.mittvaccin.se/klinik";
const APPOINTMENT_TYPE: u32 = 16573;
const SLOT_RANGE: &str = "210614-211201";

/// (clinic id, name, address)
const SITES: &[(u32, &str, &str)] = &[
    (2096, "Kronans Apotek Ale Torg", "Ale Torg 7, Nödinge"),
    (2086, "Kronans Apotek Alingsås", "Kungsgatan 34, Alingsås"),
    (2081, "Kronans Apotek Borås Allégatan 43", "Allégatan 43, Borås"),
    (2092, "Kronans Apotek Eriksbergs Köpcenter", "Kolhamnsgatan 1, Göteborg "),
    (2087, "Kronans Apotek Göteborg Wieselgrensplatsen 5", "Wieselgrensplatsen 5, Göteborg"),
    (2091, "Kronans Apotek Hisings Backa", "Selma Lagerlöfs Torg 1, Hisings Backa"),
    (2082, "Kronans Apotek Kongahälla Center", "Älvebacken 1, Kungälv"),
    (2079, "Kronans Apotek Mariestad Vårdcentral", "Lockerudsvägen 10, Mariestad"),
    (2095, "Kronans Apotek Mölnlycke Centrum", "Biblioteksgatan 4A, Mölnlycke"),
    (2085, "Kronans Apotek Sjukhuset Falköping", "Danska Vägen 62, Falköping"),
    (2084, "Kronans Apotek Skene", "Varbergsvägen 71, Skene"),
    (2083, "Kronans Apotek Strömstad", "Södra Hamngatan 4, Strömstad"),
];

/// 未提供設定檔時使用的內建地點清單
pub fn default_locations() -> Vec<Location> {
    SITES
        .iter()
        .map(|(clinic, name, address)| Location {
            name: name.to_string(),
            address: address.to_string(),
            poll_url: format!(
                "{}/{}/appointments/{}/slots/{}",
                API_BASE, clinic, APPOINTMENT_TYPE, SLOT_RANGE
            ),
            booking_link: format!("{}/{}", BOOKING_BASE, clinic),
        })
        .collect()
}
