//! User-facing response messages.

pub const LISTED: &str = "Pobrano kontakty";
pub const FOUND: &str = "Znaleziono Kontakt";
pub const CREATED: &str = "Utworzono nowy kontakt";
pub const DELETED: &str = "Kontakt usunięty";
pub const UPDATED: &str = "Kontakt został zaktualizowany";

pub const NOT_FOUND: &str = "Nie znaleziono kontaktu";
pub const READ_FAILED: &str = "Nie udało się pobrać kontaktów";
pub const WRITE_FAILED: &str = "Nie udało się zapisać kontaktów";
