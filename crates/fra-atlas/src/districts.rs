//! District lists for the targeted states

use fra_core::TargetState;

const TRIPURA: &[&str] = &[
    "Dhalai",
    "Gomati",
    "Khowai",
    "North Tripura",
    "Sepahijala",
    "South Tripura",
    "Unakoti",
    "West Tripura",
];

const MADHYA_PRADESH: &[&str] = &[
    "Agar Malwa", "Alirajpur", "Anuppur", "Ashoknagar", "Balaghat", "Barwani", "Betul",
    "Bhind", "Bhopal", "Burhanpur", "Chhatarpur", "Chhindwara", "Damoh", "Datia", "Dewas",
    "Dhar", "Dindori", "Guna", "Gwalior", "Harda", "Hoshangabad", "Indore", "Jabalpur",
    "Jhabua", "Katni", "Khandwa", "Khargone", "Mandla", "Mandsaur", "Morena", "Narsinghpur",
    "Neemuch", "Niwari", "Panna", "Rajgarh", "Raisen", "Ratlam", "Rewa", "Sagar", "Satna",
    "Sehore", "Seoni", "Shahdol", "Shajapur", "Sheopur", "Shivpuri", "Sidhi", "Singrauli",
    "Tikamgarh", "Ujjain", "Umaria", "Vidisha",
];

const ODISHA: &[&str] = &[
    "Angul", "Balasore", "Bargarh", "Bhadrak", "Bolangir", "Boudh", "Cuttack", "Debagarh",
    "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur", "Jharsuguda", "Kalahandi",
    "Kandhamal", "Kendrapara", "Keonjhar", "Khordha", "Koraput", "Malkangiri", "Mayurbhanj",
    "Nabarangpur", "Nayagarh", "Nuapada", "Puri", "Rayagada", "Sambalpur", "Subarnapur",
    "Sundargarh",
];

const TELANGANA: &[&str] = &[
    "Adilabad", "Bhadradri Kothagudem", "Hanamkonda", "Hyderabad", "Jagtial", "Jangaon",
    "Jayashankar Bhupalpally", "Jogulamba Gadwal", "Kamareddy", "Karimnagar", "Khammam",
    "Komaram Bheem Asifabad", "Mahabubnagar", "Mahbubnagar", "Mancherial", "Medak",
    "Medchal-Malkajgiri", "Mulugu", "Nagarkurnool", "Nalgonda", "Narayanpet", "Nirmal",
    "Nizamabad", "Peddapalli", "Rajanna Sircilla", "Rangareddy", "Sangareddy", "Suryapet",
    "Vikarabad", "Wanaparthy", "Warangal Rural", "Warangal Urban", "Yadadri Bhuvanagiri",
];

/// Districts of a state, in selector order
#[must_use]
pub fn districts(state: TargetState) -> &'static [&'static str] {
    match state {
        TargetState::Tripura => TRIPURA,
        TargetState::MadhyaPradesh => MADHYA_PRADESH,
        TargetState::Odisha => ODISHA,
        TargetState::Telangana => TELANGANA,
    }
}

/// Find the canonical spelling of a district, ignoring ASCII case
#[must_use]
pub fn find_district(state: TargetState, name: &str) -> Option<&'static str> {
    let name = name.trim();
    districts(state)
        .iter()
        .copied()
        .find(|d| d.eq_ignore_ascii_case(name))
}
