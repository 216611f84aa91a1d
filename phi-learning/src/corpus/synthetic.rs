//! Template-filled clinical notes with plausible PHI.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "John", "Mary", "James", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Georgia", "Virginia", "Carolina", "Dakota",
    "Montana", "Phoenix", "Austin", "Madison", "Jackson", "Lincoln",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

const STATES: &[&str] = &[
    "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois", "Ohio", "Georgia",
    "North Carolina", "Michigan", "Virginia", "Washington", "Arizona", "Massachusetts", "Indiana",
];

const CITIES: &[&str] = &[
    "Los Angeles", "Houston", "Phoenix", "Philadelphia", "San Antonio", "San Diego", "Dallas",
    "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus", "Charlotte", "Seattle",
    "Denver",
];

const CONDITIONS: &[&str] = &[
    "hypertension",
    "diabetes mellitus",
    "pneumonia",
    "COPD",
    "asthma",
    "coronary artery disease",
    "heart failure",
    "atrial fibrillation",
    "chronic kidney disease",
    "depression",
    "anxiety",
    "arthritis",
];

/// The values substituted into one note.
struct NoteFields<'a> {
    patient_first: &'a str,
    patient_last: &'a str,
    doctor_first: &'a str,
    doctor_last: &'a str,
    state: &'a str,
    city: &'a str,
    condition: &'a str,
    date: String,
    phone: String,
    mrn: String,
}

impl<'a> NoteFields<'a> {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            patient_first: pick(FIRST_NAMES, rng),
            patient_last: pick(LAST_NAMES, rng),
            doctor_first: pick(FIRST_NAMES, rng),
            doctor_last: pick(LAST_NAMES, rng),
            state: pick(STATES, rng),
            city: pick(CITIES, rng),
            condition: pick(CONDITIONS, rng),
            date: format!(
                "{:02}/{:02}/{}",
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
                rng.gen_range(2020..=2023)
            ),
            phone: format!(
                "({}) {}-{}",
                rng.gen_range(100..=999),
                rng.gen_range(100..=999),
                rng.gen_range(1000..=9999)
            ),
            mrn: format!("MR{}", rng.gen_range(100_000..=999_999)),
        }
    }

    fn render(&self, template: usize) -> String {
        let Self {
            patient_first: pf,
            patient_last: pl,
            doctor_first: df,
            doctor_last: dl,
            state,
            city,
            condition,
            date,
            phone,
            mrn,
        } = self;
        match template {
            0 => format!(
                "Patient {pf} {pl} presented to the clinic on {date} with complaints of {condition}. \
                 The patient is a resident of {city}, {state}. Contact number: {phone}. MRN: {mrn}. \
                 Examined by Dr. {df} {dl}."
            ),
            1 => format!(
                "{pf} {pl} visited on {date}. Chief complaint: {condition}. Patient resides in {city}. \
                 Phone: {phone}. Medical record: {mrn}. Dr. {dl} provided consultation."
            ),
            2 => format!(
                "Clinical Note: Pt {pf} {pl}, DOB {date}, from {state}, evaluated for {condition}. \
                 Contact: {phone}. Record #: {mrn}. Attending: Dr. {df} {dl}."
            ),
            3 => format!(
                "{date}: {pf} {pl} seen at our facility. Lives in {city}, {state}. \
                 Diagnosis: {condition}. MRN {mrn}. Tel: {phone}. Provider: {dl}."
            ),
            _ => format!(
                "Follow-up visit for {pf} {pl} on {date}. Patient from {city}. Ongoing treatment for \
                 {condition}. Contact {phone}. Chart {mrn}. Seen by Dr. {df} {dl}."
            ),
        }
    }
}

const TEMPLATE_COUNT: usize = 5;

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Generate `count` synthetic notes. Deterministic for a seeded `rng`.
pub fn generate_synthetic_notes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            let fields = NoteFields::draw(rng);
            fields.render(rng.gen_range(0..TEMPLATE_COUNT))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn produces_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_synthetic_notes(25, &mut rng).len(), 25);
        assert!(generate_synthetic_notes(0, &mut rng).is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_synthetic_notes(10, &mut StdRng::seed_from_u64(9));
        let b = generate_synthetic_notes(10, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn every_template_carries_labelable_phi() {
        let mut rng = StdRng::seed_from_u64(5);
        let fields = NoteFields::draw(&mut rng);
        for template in 0..TEMPLATE_COUNT {
            let note = fields.render(template);
            assert!(note.contains(&fields.date), "template {template}");
            assert!(note.contains(&fields.phone), "template {template}");
            assert!(note.contains(&fields.mrn), "template {template}");
        }
    }

    #[test]
    fn fields_have_expected_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let f = NoteFields::draw(&mut rng);
            assert_eq!(f.date.len(), 10);
            let year: u32 = f.date[6..].parse().unwrap();
            assert!((2020..=2023).contains(&year));
            assert_eq!(f.phone.len(), 14);
            assert_eq!(f.mrn.len(), 8);
        }
    }
}
