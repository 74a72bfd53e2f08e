pub const SITE_NAME: &str = "Salonboard";
