//! Static copy for the three assessment journeys.
//!
//! Everything here is immutable and resolved by the identifier that appears in
//! the `/intro/:id` and `/pre-call/:id` paths.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offering {
    Depression,
    Medication,
    Treatment,
}

pub struct OfferingContent {
    pub title: &'static str,
    /// One-liner shown on the landing card.
    pub summary: &'static str,
    pub image: &'static str,
    /// Introduction text, paragraphs separated by a blank line.
    pub intro: &'static str,
    pub experience: &'static [&'static str],
    /// Protocol name the call service expects in `call_type`.
    pub call_type: &'static str,
}

impl Offering {
    /// Landing page order.
    pub const ALL: [Offering; 3] = [Offering::Depression, Offering::Medication, Offering::Treatment];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "depression" => Some(Offering::Depression),
            "medication" => Some(Offering::Medication),
            "treatment" => Some(Offering::Treatment),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Offering::Depression => "depression",
            Offering::Medication => "medication",
            Offering::Treatment => "treatment",
        }
    }

    pub fn content(self) -> &'static OfferingContent {
        match self {
            Offering::Depression => &DEPRESSION,
            Offering::Medication => &MEDICATION,
            Offering::Treatment => &TREATMENT,
        }
    }

    pub fn intro_paragraphs(self) -> impl Iterator<Item = &'static str> {
        self.content().intro.split("\n\n")
    }
}

static DEPRESSION: OfferingContent = OfferingContent {
    title: "Depression Screening (PHQ-9)",
    summary: "Complete a validated PHQ-9 assessment to monitor depression symptoms and track treatment progress.",
    image: "https://cdn.prod.website-files.com/66d8df543029dd65661ce227/67374db19b8f787c3a3ac2b2_a%20person%20holding%20a%20c.jpg",
    intro: "You'll step into the shoes of Alex Thompson, a 35-year-old experiencing symptoms of depression. Your healthcare provider has recommended regular PHQ-9 assessments to monitor your symptoms and treatment progress.\n\nThe PHQ-9 is a validated screening tool that helps measure depression severity and track changes over time. This assessment will help your care team understand how you're feeling and adjust your treatment plan if needed.",
    experience: &[
        "Complete PHQ-9 questionnaire",
        "Discuss symptom changes",
        "Track treatment progress",
        "Identify areas of concern",
    ],
    call_type: "phq_9",
};

static MEDICATION: OfferingContent = OfferingContent {
    title: "Medication Adherence Monitoring",
    summary: "Track medication compliance and identify barriers to treatment success.",
    image: "https://cdn.prod.website-files.com/66d8df543029dd65661ce227/67374da54aec1779e5579b2d_a%20person%20holding%20a%20p%20(1).jpg",
    intro: "You'll step into the shoes of Jordan Chen, a 52-year-old who recently started a complex medication regimen. After being diagnosed with treatment-resistant depression, Jordan was prescribed multiple medications including an antidepressant and mood stabilizer...\n\nTheir care team wants to ensure medication adherence and monitor for any potential barriers to treatment success.",
    experience: &[
        "Medication adherence check",
        "Side effect monitoring",
        "Barrier identification",
        "Resource coordination",
    ],
    call_type: "medication_adherence",
};

static TREATMENT: OfferingContent = OfferingContent {
    title: "Treatment Response Assessment",
    summary: "Evaluate treatment effectiveness and optimize care plans.",
    image: "https://cdn.prod.website-files.com/66d8df543029dd65661ce227/67374dad964c848ab0907347_a%20person%20looking%20at.jpg",
    intro: "You'll step into the shoes of Sarah Martinez, a 38-year-old three months into an integrated treatment plan for chronic pain and depression. Sarah's healthcare team has implemented a multi-modal approach combining medication, physical therapy, and counseling...\n\nThe care team wants to evaluate treatment effectiveness and make any necessary adjustments to optimize outcomes.",
    experience: &[
        "Progress evaluation",
        "Quality of life assessment",
        "Treatment effectiveness review",
        "Care plan adjustment discussion",
    ],
    call_type: "treatment_response",
};
