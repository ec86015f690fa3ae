//! Shared test utilities and fixtures for ULS parser tests


/// Build a pipe-delimited line of `len` fields with the given positions set
pub fn build_line(tag: &str, len: usize, values: &[(usize, &str)]) -> String {
    let mut fields = vec![String::new(); len.max(1)];
    fields[0] = tag.to_string();
    for (position, value) in values {
        fields[*position] = value.to_string();
    }
    fields.join("|")
}

/// Create an `HD` license header line
pub fn create_hd_line(call_sign: &str, service: &str, granted: &str, expires: &str) -> String {
    build_line(
        "HD",
        43,
        &[
            (1, "3001"),
            (2, "146.52"),
            (4, call_sign),
            (6, service),
            (7, granted),
            (8, expires),
        ],
    )
}

/// Create an `HS` history line
pub fn create_hs_line(call_sign: &str, date: &str, action: &str) -> String {
    build_line("HS", 6, &[(1, "3001"), (3, call_sign), (4, date), (5, action)])
}

/// Sample download with every record type and some noise
pub const SAMPLE_DOWNLOAD: &str = "\
HD|3001|146.52||KB1ABC||HA|01/01/2015|01/01/2025|
EN|3001|||KB1ABC|L|||JOHN|J|DOE|JR||||123 MAIN ST
AM|3001|||KB1ABC|G|B
LM|3001|||KB1ABC||Club
SC|3001|||KB1ABC|L|LOCAL
CO|3001|||KB1ABC|a comment

HS|3001||KB1ABC|03/01/2020|LIREN
HS|3001||KB1ABC|01/01/2015|LIISS
ZZ|ignored|record|type|here
HD|short
HD|3002|||AA1XYZ||HV||||
HD|9999|||KB1ABC||ZA||||
";
