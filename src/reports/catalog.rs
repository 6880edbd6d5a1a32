//! Static reference data: regions, districts, anomaly types, policies.

use serde::Serialize;

pub static STATES: [&str; 30] = [
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh",
    "Goa", "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand",
    "Karnataka", "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur",
    "Meghalaya", "Mizoram", "Nagaland", "Odisha", "Punjab",
    "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal", "Delhi", "Jammu and Kashmir",
];

static DISTRICTS: [(&str, [&str; 8]); 15] = [
    ("Uttar Pradesh", ["Lucknow", "Kanpur", "Agra", "Varanasi", "Allahabad", "Gorakhpur", "Meerut", "Ghaziabad"]),
    ("Maharashtra", ["Mumbai", "Pune", "Nagpur", "Thane", "Nashik", "Aurangabad", "Solapur", "Kolhapur"]),
    ("Bihar", ["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Purnia", "Darbhanga", "Begusarai", "Munger"]),
    ("West Bengal", ["Kolkata", "Howrah", "Durgapur", "Asansol", "Siliguri", "Bardhaman", "Malda", "Hooghly"]),
    ("Andhra Pradesh", ["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Kurnool", "Tirupati", "Kakinada", "Chittoor"]),
    ("Tamil Nadu", ["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem", "Tirunelveli", "Erode", "Vellore"]),
    ("Karnataka", ["Bangalore", "Mysore", "Hubli", "Mangalore", "Belgaum", "Gulbarga", "Davangere", "Bellary"]),
    ("Gujarat", ["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar", "Jamnagar", "Junagadh", "Gandhinagar"]),
    ("Rajasthan", ["Jaipur", "Jodhpur", "Udaipur", "Kota", "Bikaner", "Ajmer", "Bhilwara", "Alwar"]),
    ("Kerala", ["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur", "Kollam", "Palakkad", "Kannur", "Malappuram"]),
    ("Madhya Pradesh", ["Bhopal", "Indore", "Gwalior", "Jabalpur", "Ujjain", "Sagar", "Dewas", "Satna"]),
    ("Telangana", ["Hyderabad", "Warangal", "Nizamabad", "Karimnagar", "Khammam", "Ramagundam", "Mahbubnagar", "Nalgonda"]),
    ("Delhi", ["Central Delhi", "North Delhi", "South Delhi", "East Delhi", "West Delhi", "New Delhi", "North West Delhi", "South West Delhi"]),
    ("Assam", ["Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Nagaon", "Tinsukia", "Tezpur", "Bongaigaon"]),
    ("Punjab", ["Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Bathinda", "Mohali", "Pathankot", "Hoshiarpur"]),
];

static PLACEHOLDER_DISTRICTS: [&str; 3] = ["District 1", "District 2", "District 3"];

pub const ANOMALY_TYPES: [&str; 10] = [
    "Duplicate Aadhaar ID",
    "Invalid PIN Code",
    "Missing DOB",
    "Invalid Phone Format",
    "Impossible Age (0 or 150+)",
    "District-State Mismatch",
    "Inconsistent Gender Labels",
    "Biometric Quality Issues",
    "Address Format Errors",
    "Name Character Issues",
];

/// Known districts of `state`, or placeholders for regions without a list.
pub fn districts_of(state: &str) -> &'static [&'static str] {
    DISTRICTS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, districts)| districts.as_slice())
        .unwrap_or(PLACEHOLDER_DISTRICTS.as_slice())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyRecommendation {
    pub id: u32,
    pub title: &'static str,
    pub severity: Severity,
    pub reason: &'static str,
    pub steps: &'static [&'static str],
    pub executor: &'static str,
    pub expected_outcome: &'static str,
    pub estimated_impact: u64,
}

pub const POLICY_RECOMMENDATIONS: [PolicyRecommendation; 6] = [
    PolicyRecommendation {
        id: 1,
        title: "PIN Code Validation & Correction",
        severity: Severity::Critical,
        reason: "12.5% of records have invalid PIN codes that don't match state/district mapping",
        steps: &[
            "Export all records with PIN code mismatches",
            "Cross-reference with India Post PIN database",
            "Generate correction candidates using fuzzy matching",
            "Queue corrected records for operator verification",
            "Update database after manual approval",
        ],
        executor: "System + Operator",
        expected_outcome: "95% PIN code accuracy improvement",
        estimated_impact: 625_000,
    },
    PolicyRecommendation {
        id: 2,
        title: "Duplicate Aadhaar ID Resolution",
        severity: Severity::Critical,
        reason: "6.2% records flagged as potential duplicates based on biometric similarity",
        steps: &[
            "Run biometric matching algorithm on flagged records",
            "Generate duplicate pairs with similarity scores",
            "Present to verification team for manual review",
            "Merge/invalidate confirmed duplicates",
            "Generate audit trail for compliance",
        ],
        executor: "Admin + Verification Team",
        expected_outcome: "Eliminate duplicate entries, improve data integrity",
        estimated_impact: 310_000,
    },
    PolicyRecommendation {
        id: 3,
        title: "Mobile OTP Re-confirmation",
        severity: Severity::High,
        reason: "3.8% of records have invalid phone formats or multiple Aadhaar linked to same number",
        steps: &[
            "Identify all records with phone format issues",
            "Send OTP to registered numbers for re-verification",
            "Mark non-responsive records for manual outreach",
            "Update phone numbers post verification",
            "Generate compliance report",
        ],
        executor: "System + Call Center",
        expected_outcome: "Valid phone linkage for 98% records",
        estimated_impact: 190_000,
    },
    PolicyRecommendation {
        id: 4,
        title: "DOB Missing/Invalid Correction",
        severity: Severity::High,
        reason: "2.1% records have missing or impossible DOB values",
        steps: &[
            "Extract records with DOB issues",
            "Cross-reference with enrollment documents",
            "Request document re-submission where needed",
            "Apply age validation rules",
            "Update corrected DOB values",
        ],
        executor: "Operator",
        expected_outcome: "Complete DOB coverage with validation",
        estimated_impact: 105_000,
    },
    PolicyRecommendation {
        id: 5,
        title: "District-State Mapping Correction",
        severity: Severity::Medium,
        reason: "1.5% records have district names not matching their assigned states",
        steps: &[
            "Run district-state validation check",
            "Generate list of mismatched records",
            "Use address parsing to determine correct mapping",
            "Apply bulk corrections for high-confidence matches",
            "Queue ambiguous cases for manual review",
        ],
        executor: "System + Operator",
        expected_outcome: "100% correct district-state mapping",
        estimated_impact: 75_000,
    },
    PolicyRecommendation {
        id: 6,
        title: "Biometric Quality Enhancement",
        severity: Severity::Medium,
        reason: "0.8% records have low-quality biometric data",
        steps: &[
            "Identify records with quality scores below threshold",
            "Prioritize by enrollment date and usage frequency",
            "Schedule re-enrollment camps",
            "Track re-enrollment completion",
            "Update quality metrics",
        ],
        executor: "Field Team + Admin",
        expected_outcome: "Biometric quality score above 80% for all records",
        estimated_impact: 40_000,
    },
];
