use crate::domain::location::{
    alias::{normalize, same_state},
    value_objects::StateKey,
};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// States and union territories with their districts in display order.
const STATE_DISTRICTS: &[(&str, &[&str])] = &[
    (
        "Uttar Pradesh",
        &[
            "Agra", "Aligarh", "Ambedkar Nagar", "Amethi", "Amroha", "Auraiya", "Ayodhya",
            "Azamgarh", "Baghpat", "Bahraich", "Ballia", "Balrampur", "Banda", "Barabanki",
            "Bareilly", "Basti", "Bhadohi", "Bijnor", "Budaun", "Bulandshahr", "Chandauli",
            "Chitrakoot", "Deoria", "Etah", "Etawah", "Farrukhabad", "Fatehpur", "Firozabad",
            "Gautam Buddha Nagar", "Ghaziabad", "Ghazipur", "Gonda", "Gorakhpur", "Hamirpur",
            "Hapur", "Hardoi", "Hathras", "Jalaun", "Jaunpur", "Jhansi", "Kannauj", "Kanpur Dehat",
            "Kanpur Nagar", "Kasganj", "Kaushambi", "Kushinagar", "Lakhimpur Kheri", "Lalitpur",
            "Lucknow", "Maharajganj", "Mahoba", "Mainpuri", "Mathura", "Mau", "Meerut", "Mirzapur",
            "Moradabad", "Muzaffarnagar", "Pilibhit", "Pratapgarh", "Prayagraj", "Raebareli",
            "Rampur", "Saharanpur", "Sambhal", "Sant Kabir Nagar", "Shahjahanpur", "Shamli",
            "Shravasti", "Siddharthnagar", "Sitapur", "Sonbhadra", "Sultanpur", "Unnao",
            "Varanasi",
        ],
    ),
    (
        "Maharashtra",
        &[
            "Ahmednagar", "Akola", "Amravati", "Aurangabad", "Beed", "Bhandara", "Buldhana",
            "Chandrapur", "Dhule", "Gadchiroli", "Gondia", "Hingoli", "Jalgaon", "Jalna",
            "Kolhapur", "Latur", "Mumbai City", "Mumbai Suburban", "Nagpur", "Nanded", "Nandurbar",
            "Nashik", "Osmanabad", "Palghar", "Parbhani", "Pune", "Raigad", "Ratnagiri", "Sangli",
            "Satara", "Sindhudurg", "Solapur", "Thane", "Wardha", "Washim", "Yavatmal",
        ],
    ),
    (
        "Delhi",
        &[
            "Central Delhi", "East Delhi", "New Delhi", "North Delhi", "North East Delhi",
            "North West Delhi", "Shahdara", "South Delhi", "South East Delhi", "South West Delhi",
            "West Delhi",
        ],
    ),
    (
        "Gujarat",
        &[
            "Ahmedabad", "Amreli", "Anand", "Aravalli", "Banaskantha", "Bharuch", "Bhavnagar",
            "Botad", "Chhota Udaipur", "Dahod", "Dang", "Devbhoomi Dwarka", "Gandhinagar",
            "Gir Somnath", "Jamnagar", "Junagadh", "Kheda", "Kutch", "Mahisagar", "Mehsana",
            "Morbi", "Narmada", "Navsari", "Panchmahal", "Patan", "Porbandar", "Rajkot",
            "Sabarkantha", "Surat", "Surendranagar", "Tapi", "Vadodara", "Valsad",
        ],
    ),
    (
        "Rajasthan",
        &[
            "Ajmer", "Alwar", "Banswara", "Baran", "Barmer", "Bharatpur", "Bhilwara", "Bikaner",
            "Bundi", "Chittorgarh", "Churu", "Dausa", "Dholpur", "Dungarpur", "Hanumangarh",
            "Jaipur", "Jaisalmer", "Jalore", "Jhalawar", "Jhunjhunu", "Jodhpur", "Karauli", "Kota",
            "Nagaur", "Pali", "Pratapgarh", "Rajsamand", "Sawai Madhopur", "Sikar", "Sirohi",
            "Sri Ganganagar", "Tonk", "Udaipur",
        ],
    ),
    (
        "Haryana",
        &[
            "Ambala", "Bhiwani", "Charkhi Dadri", "Faridabad", "Fatehabad", "Gurugram", "Hisar",
            "Jhajjar", "Jind", "Kaithal", "Karnal", "Kurukshetra", "Mahendragarh", "Nuh", "Palwal",
            "Panchkula", "Panipat", "Rewari", "Rohtak", "Sirsa", "Sonipat", "Yamunanagar",
        ],
    ),
    (
        "Punjab",
        &[
            "Amritsar", "Barnala", "Bathinda", "Faridkot", "Fatehgarh Sahib", "Fazilka",
            "Ferozepur", "Gurdaspur", "Hoshiarpur", "Jalandhar", "Kapurthala", "Ludhiana", "Mansa",
            "Moga", "Mohali", "Muktsar", "Pathankot", "Patiala", "Rupnagar", "Sangrur",
            "Shahid Bhagat Singh Nagar", "Tarn Taran",
        ],
    ),
    (
        "Andhra Pradesh",
        &[
            "Anantapur", "Chittoor", "East Godavari", "Guntur", "Krishna", "Kurnool", "Nellore",
            "Prakasam", "Srikakulam", "Visakhapatnam", "Vizianagaram", "West Godavari",
            "YSR Kadapa",
        ],
    ),
    (
        "Karnataka",
        &[
            "Bagalkot", "Ballari", "Belagavi", "Bengaluru Rural", "Bengaluru Urban", "Bidar",
            "Chamarajanagar", "Chikballapur", "Chikkamagaluru", "Chitradurga", "Dakshina Kannada",
            "Davanagere", "Dharwad", "Gadag", "Hassan", "Haveri", "Kalaburagi", "Kodagu", "Kolar",
            "Koppal", "Mandya", "Mysuru", "Raichur", "Ramanagara", "Shivamogga", "Tumakuru",
            "Udupi", "Uttara Kannada", "Vijayapura", "Yadgir",
        ],
    ),
    (
        "Tamil Nadu",
        &[
            "Ariyalur", "Chengalpattu", "Chennai", "Coimbatore", "Cuddalore", "Dharmapuri",
            "Dindigul", "Erode", "Kallakurichi", "Kanchipuram", "Kanyakumari", "Karur",
            "Krishnagiri", "Madurai", "Mayiladuthurai", "Nagapattinam", "Namakkal", "Nilgiris",
            "Perambalur", "Pudukkottai", "Ramanathapuram", "Ranipet", "Salem", "Sivaganga",
            "Tenkasi", "Thanjavur", "Theni", "Thoothukudi", "Tiruchirappalli", "Tirunelveli",
            "Tirupathur", "Tiruppur", "Tiruvallur", "Tiruvannamalai", "Tiruvarur", "Vellore",
            "Viluppuram", "Virudhunagar",
        ],
    ),
    (
        "West Bengal",
        &[
            "Alipurduar", "Bankura", "Birbhum", "Cooch Behar", "Dakshin Dinajpur", "Darjeeling",
            "Hooghly", "Howrah", "Jalpaiguri", "Jhargram", "Kalimpong", "Kolkata", "Malda",
            "Murshidabad", "Nadia", "North 24 Parganas", "Paschim Bardhaman", "Paschim Medinipur",
            "Purba Bardhaman", "Purba Medinipur", "Purulia", "South 24 Parganas", "Uttar Dinajpur",
        ],
    ),
    (
        "Kerala",
        &[
            "Alappuzha", "Ernakulam", "Idukki", "Kannur", "Kasaragod", "Kollam", "Kottayam",
            "Kozhikode", "Malappuram", "Palakkad", "Pathanamthitta", "Thiruvananthapuram",
            "Thrissur", "Wayanad",
        ],
    ),
    (
        "Telangana",
        &[
            "Adilabad", "Bhadradri Kothagudem", "Hyderabad", "Jagtial", "Jangaon",
            "Jayashankar Bhupalpally", "Jogulamba Gadwal", "Kamareddy", "Karimnagar", "Khammam",
            "Komaram Bheem", "Mahabubabad", "Mahabubnagar", "Mancherial", "Medak",
            "Medchal-Malkajgiri", "Mulugu", "Nagarkurnool", "Nalgonda", "Narayanpet", "Nirmal",
            "Nizamabad", "Peddapalli", "Rajanna Sircilla", "Rangareddy", "Sangareddy", "Siddipet",
            "Suryapet", "Vikarabad", "Wanaparthy", "Warangal Rural", "Warangal Urban",
            "Yadadri Bhuvanagiri",
        ],
    ),
    (
        "Madhya Pradesh",
        &[
            "Agar Malwa", "Alirajpur", "Anuppur", "Ashoknagar", "Balaghat", "Barwani", "Betul",
            "Bhind", "Bhopal", "Burhanpur", "Chhatarpur", "Chhindwara", "Damoh", "Datia", "Dewas",
            "Dhar", "Dindori", "Guna", "Gwalior", "Harda", "Hoshangabad", "Indore", "Jabalpur",
            "Jhabua", "Katni", "Khandwa", "Khargone", "Mandla", "Mandsaur", "Morena",
            "Narsinghpur", "Neemuch", "Niwari", "Panna", "Raisen", "Rajgarh", "Ratlam", "Rewa",
            "Sagar", "Satna", "Sehore", "Seoni", "Shahdol", "Shajapur", "Sheopur", "Shivpuri",
            "Sidhi", "Singrauli", "Tikamgarh", "Ujjain", "Umaria", "Vidisha",
        ],
    ),
    (
        "Bihar",
        &[
            "Araria", "Arwal", "Aurangabad", "Banka", "Begusarai", "Bhagalpur", "Bhojpur", "Buxar",
            "Darbhanga", "East Champaran", "Gaya", "Gopalganj", "Jamui", "Jehanabad", "Kaimur",
            "Katihar", "Khagaria", "Kishanganj", "Lakhisarai", "Madhepura", "Madhubani", "Munger",
            "Muzaffarpur", "Nalanda", "Nawada", "Patna", "Purnia", "Rohtas", "Saharsa",
            "Samastipur", "Saran", "Sheikhpura", "Sheohar", "Sitamarhi", "Siwan", "Supaul",
            "Vaishali", "West Champaran",
        ],
    ),
    (
        "Odisha",
        &[
            "Angul", "Balangir", "Balasore", "Bargarh", "Bhadrak", "Boudh", "Cuttack", "Deogarh",
            "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur", "Jharsuguda",
            "Kalahandi", "Kandhamal", "Kendrapara", "Kendujhar", "Khordha", "Koraput",
            "Malkangiri", "Mayurbhanj", "Nabarangpur", "Nayagarh", "Nuapada", "Puri", "Rayagada",
            "Sambalpur", "Subarnapur", "Sundergarh",
        ],
    ),
    (
        "Jharkhand",
        &[
            "Bokaro", "Chatra", "Deoghar", "Dhanbad", "Dumka", "East Singhbhum", "Garhwa",
            "Giridih", "Godda", "Gumla", "Hazaribagh", "Jamtara", "Khunti", "Koderma", "Latehar",
            "Lohardaga", "Pakur", "Palamu", "Ramgarh", "Ranchi", "Sahebganj",
            "Seraikela Kharsawan", "Simdega", "West Singhbhum",
        ],
    ),
    (
        "Assam",
        &[
            "Baksa", "Barpeta", "Biswanath", "Bongaigaon", "Cachar", "Charaideo", "Chirang",
            "Darrang", "Dhemaji", "Dhubri", "Dibrugarh", "Dima Hasao", "Goalpara", "Golaghat",
            "Hailakandi", "Hojai", "Jorhat", "Kamrup", "Kamrup Metropolitan", "Karbi Anglong",
            "Karimganj", "Kokrajhar", "Lakhimpur", "Majuli", "Morigaon", "Nagaon", "Nalbari",
            "Sivasagar", "Sonitpur", "South Salmara-Mankachar", "Tinsukia", "Udalguri",
            "West Karbi Anglong",
        ],
    ),
    (
        "Chhattisgarh",
        &[
            "Balod", "Baloda Bazar", "Balrampur", "Bastar", "Bemetara", "Bijapur", "Bilaspur",
            "Dantewada", "Dhamtari", "Durg", "Gariaband", "Gaurela Pendra Marwahi",
            "Janjgir Champa", "Jashpur", "Kabirdham", "Kanker", "Kondagaon", "Korba", "Koriya",
            "Mahasamund", "Mungeli", "Narayanpur", "Raigarh", "Raipur", "Rajnandgaon", "Sukma",
            "Surajpur", "Surguja",
        ],
    ),
    (
        "Uttarakhand",
        &[
            "Almora", "Bageshwar", "Chamoli", "Champawat", "Dehradun", "Haridwar", "Nainital",
            "Pauri Garhwal", "Pithoragarh", "Rudraprayag", "Tehri Garhwal", "Udham Singh Nagar",
            "Uttarkashi",
        ],
    ),
    (
        "Himachal Pradesh",
        &[
            "Bilaspur", "Chamba", "Hamirpur", "Kangra", "Kinnaur", "Kullu", "Lahaul and Spiti",
            "Mandi", "Shimla", "Sirmaur", "Solan", "Una",
        ],
    ),
    (
        "Goa",
        &[
            "North Goa", "South Goa",
        ],
    ),
    (
        "Arunachal Pradesh",
        &[
            "Anjaw", "Changlang", "Dibang Valley", "East Kameng", "East Siang", "Kamle",
            "Kra Daadi", "Kurung Kumey", "Lepa Rada", "Lohit", "Longding", "Lower Dibang Valley",
            "Lower Siang", "Lower Subansiri", "Namsai", "Pakke Kessang", "Papum Pare", "Shi Yomi",
            "Siang", "Tawang", "Tirap", "Upper Siang", "Upper Subansiri", "West Kameng",
            "West Siang",
        ],
    ),
    (
        "Manipur",
        &[
            "Bishnupur", "Chandel", "Churachandpur", "Imphal East", "Imphal West", "Jiribam",
            "Kakching", "Kamjong", "Kangpokpi", "Noney", "Pherzawl", "Senapati", "Tamenglong",
            "Tengnoupal", "Thoubal", "Ukhrul",
        ],
    ),
    (
        "Meghalaya",
        &[
            "East Garo Hills", "East Jaintia Hills", "East Khasi Hills", "North Garo Hills",
            "Ri Bhoi", "South Garo Hills", "South West Garo Hills", "South West Khasi Hills",
            "West Garo Hills", "West Jaintia Hills", "West Khasi Hills",
        ],
    ),
    (
        "Mizoram",
        &[
            "Aizawl", "Champhai", "Hnahthial", "Khawzawl", "Kolasib", "Lawngtlai", "Lunglei",
            "Mamit", "Saiha", "Saitual", "Serchhip",
        ],
    ),
    (
        "Nagaland",
        &[
            "Dimapur", "Kiphire", "Kohima", "Longleng", "Mokokchung", "Mon", "Noklak", "Peren",
            "Phek", "Tuensang", "Wokha", "Zunheboto",
        ],
    ),
    (
        "Sikkim",
        &[
            "East Sikkim", "North Sikkim", "South Sikkim", "West Sikkim",
        ],
    ),
    (
        "Tripura",
        &[
            "Dhalai", "Gomati", "Khowai", "North Tripura", "Sepahijala", "South Tripura",
            "Unakoti", "West Tripura",
        ],
    ),
    (
        "Andaman and Nicobar Islands",
        &[
            "Nicobar", "North and Middle Andaman", "South Andaman", "South Nicobar",
        ],
    ),
    (
        "Chandigarh",
        &[
            "Chandigarh",
        ],
    ),
    (
        "Dadra and Nagar Haveli and Daman and Diu",
        &[
            "Dadra and Nagar Haveli", "Daman", "Diu",
        ],
    ),
    (
        "Lakshadweep",
        &[
            "Lakshadweep",
        ],
    ),
    (
        "Puducherry",
        &[
            "Puducherry", "Karaikal", "Mahe", "Yanam",
        ],
    ),
    (
        "Jammu and Kashmir",
        &[
            "Jammu", "Samba", "Kathua", "Udhampur", "Reasi", "Rajouri", "Poonch", "Doda",
            "Kishtwar", "Ramban", "Anantnag", "Bandipora", "Baramulla", "Budgam", "Ganderbal",
            "Kulgam", "Kupwara", "Pulwama", "Shopian", "Srinagar",
        ],
    ),
    (
        "Ladakh",
        &[
            "Leh", "Kargil",
        ],
    ),
];

/// Union territories, as catalog keys.
const UNION_TERRITORIES: &[&str] = &[
    "andaman and nicobar islands",
    "chandigarh",
    "dadra and nagar haveli and daman and diu",
    "delhi",
    "jammu and kashmir",
    "ladakh",
    "lakshadweep",
    "puducherry",
];

lazy_static! {
    static ref STATE_INDEX: HashMap<StateKey, usize> = STATE_DISTRICTS
        .iter()
        .enumerate()
        .map(|(i, (state, _))| (normalize(state), i))
        .collect();
}

/// Canonical state names in display order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATE_DISTRICTS.iter().map(|(state, _)| *state)
}

/// Districts of `state` in display order; empty for unknown states.
///
/// `state` is expected to come from [`states`], so only the normalized key
/// is compared. Alias tolerance belongs to [`canonical_state`].
pub fn districts_for(state: &str) -> &'static [&'static str] {
    STATE_INDEX
        .get(&normalize(state))
        .map(|&i| STATE_DISTRICTS[i].1)
        .unwrap_or(&[])
}

/// Resolves an externally reported state name to its catalog spelling.
///
/// Tries an exact match first, then the alias-tolerant comparison.
pub fn canonical_state(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(state) = states().find(|state| *state == raw) {
        return Some(state);
    }
    let wanted = normalize(raw);
    states().find(|state| same_state(&normalize(state), &wanted))
}

pub fn is_union_territory(state: &str) -> bool {
    canonical_state(state)
        .map(|state| UNION_TERRITORIES.contains(&normalize(state).as_str()))
        .unwrap_or(false)
}
