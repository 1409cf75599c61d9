//! Static master lists used by the in-memory lookups.

pub const UNIT_CODES: &[&str] = &[
    "BAG", "BGS", "BLS", "BRL", "BTL", "BOX", "BLK", "CAN", "CAR", "CRY", "CTN", "CMS", "CHI",
    "COL", "CON", "CRI", "CCM", "CFT", "CBI", "CBM", "CYL", "DOZ", "DRM", "FLK", "FOT", "FUT",
    "GMS", "GRS", "FBK", "INC", "NGT", "JTA", "JAL", "KEG", "KLT", "KGS", "KME", "KIT", "LTR",
    "LOG", "TON", "MTR", "MTS", "MGS", "MOU", "NOS", "NHM", "THD", "PKG", "PAC", "PAI", "PRS",
    "PLT", "PCS", "PNT", "PND", "QDS", "QTL", "REL", "ROL", "SET", "SKD", "SLB", "SQF", "SQM",
    "SQY", "BLO", "BUL", "ENV", "TBL", "TNK", "TGM", "TIN", "TRK", "UNT", "UGS", "CSK", "YDS",
];

pub const INDIAN_STATES: &[&str] = &[
    "Andaman and Nicobar Islands",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Ladakh",
    "Lakshadweep",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub const CFS_LIST: &[&str] = &[
    "Golden Horn Containers Service",
    "ICD AHMEDABAD",
    "ICD SACHANA",
    "ICD SANAND",
    "QUEST CONTIANER DEPOT",
];

pub const NATURE_OF_CARGO: &[&str] = &[
    "C - containerized",
    "C - non containerized packaged",
    "LB - liquid bulk",
    "DB - dry bulk",
    "CP - containerized and packaged",
];

pub const INVOICE_CURRENCIES: &[&str] = &[
    "INR", "USD", "EUR", "GBP", "AED", "AUD", "CAD", "CHF", "CNY", "DKK", "HKD", "JPY", "KWD",
    "NOK", "NZD", "QAR", "SAR", "SEK", "SGD", "ZAR",
];

pub const TERMS_OF_INVOICE: &[&str] = &["FOB", "CIF", "C&F", "C&I"];

pub const TRANSPORT_MODES: &[&str] = &["SEA", "AIR", "LAND"];
