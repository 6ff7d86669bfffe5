//! Default competitor lists keyed by company name.

/// Generates a competitor list for a company.
///
/// Well-known company names get their actual rival lists; everything else
/// gets a fixed generic list the user is expected to replace.
pub fn competitors(company_name: &str) -> Vec<String> {
    let name_lc = company_name.to_lowercase();

    let names: &[&str] = if name_lc.contains("apple") {
        &[
            "Samsung Electronics",
            "Google (Pixel)",
            "Huawei",
            "Xiaomi",
            "Microsoft (Surface)",
            "HP",
            "Dell",
            "Lenovo",
            "Sony",
            "LG",
            "OnePlus",
            "Asus",
            "Acer",
            "Razer",
            "HTC",
            "Motorola",
            "Nokia",
            "BlackBerry",
            "Fujitsu",
            "Panasonic",
        ]
    } else if name_lc.contains("microsoft") {
        &[
            "Google",
            "Amazon (AWS)",
            "Apple",
            "Salesforce",
            "Oracle",
            "IBM",
            "SAP",
            "Adobe",
            "Workday",
            "ServiceNow",
            "VMware",
            "Red Hat",
            "Cisco",
            "Dell Technologies",
            "HP Inc.",
            "Lenovo",
            "Samsung",
            "Sony",
            "Nintendo",
            "Activision Blizzard",
        ]
    } else {
        &[
            "Competitor A Corp.",
            "Competitor B Ltd.",
            "Competitor C Inc.",
            "Competitor D Group",
            "Competitor E Solutions",
            "Competitor F Innovations",
            "Competitor G Global",
            "Competitor H Systems",
            "Competitor I Enterprises",
            "Competitor J Holdings",
            "Competitor K Dynamics",
            "Competitor L Industries",
            "Competitor M Ventures",
            "Competitor N Tech",
            "Competitor O Services",
            "Competitor P Corp.",
            "Competitor Q Ltd.",
            "Competitor R Inc.",
            "Competitor S Group",
            "Competitor T Solutions",
        ]
    };

    names.iter().map(|s| s.to_string()).collect()
}
