use crate::catalog::DsmCategory;

use super::DisorderRow;

pub(super) const DISORDERS: &[DisorderRow] = &[
    DisorderRow {
        id: "mdd",
        name: "Major Depressive Disorder",
        code: "F32/F33",
        category: DsmCategory::Depressive,
        description: "Episodes of depressed mood or loss of interest with additional symptoms for at least 2 weeks",
        required: &[
            "dep-1", "dep-2", "dep-3", "dep-4", "dep-5", "dep-6", "dep-7", "dep-8", "dep-9",
        ],
        minimum: 5,
        duration: Some("At least 2 weeks"),
    },
    DisorderRow {
        id: "pdd",
        name: "Persistent Depressive Disorder (Dysthymia)",
        code: "F34.1",
        category: DsmCategory::Depressive,
        description: "Chronic depressed mood for at least 2 years with additional symptoms",
        required: &["dep-10", "dep-3", "dep-4", "dep-6", "dep-7", "dep-8"],
        minimum: 3,
        duration: Some("At least 2 years"),
    },
    DisorderRow {
        id: "gad",
        name: "Generalized Anxiety Disorder",
        code: "F41.1",
        category: DsmCategory::Anxiety,
        description: "Excessive anxiety and worry occurring more days than not for at least 6 months",
        required: &["anx-1", "anx-2", "anx-3", "anx-4", "anx-5", "anx-6", "anx-7", "anx-8"],
        minimum: 4,
        duration: Some("At least 6 months"),
    },
    DisorderRow {
        id: "panic",
        name: "Panic Disorder",
        code: "F41.0",
        category: DsmCategory::Anxiety,
        description: "Recurrent unexpected panic attacks with persistent concern about additional attacks",
        required: &["anx-9", "anx-10", "anx-11", "anx-12", "anx-13", "anx-14"],
        minimum: 3,
        duration: Some("At least 1 month of concern about attacks"),
    },
    DisorderRow {
        id: "social-anxiety",
        name: "Social Anxiety Disorder",
        code: "F40.10",
        category: DsmCategory::Anxiety,
        description: "Marked fear or anxiety about social situations involving scrutiny",
        required: &["anx-15", "anx-16"],
        minimum: 2,
        duration: Some("At least 6 months"),
    },
    DisorderRow {
        id: "specific-phobia",
        name: "Specific Phobia",
        code: "F40.2xx",
        category: DsmCategory::Anxiety,
        description: "Marked fear or anxiety about a specific object or situation",
        required: &["anx-17"],
        minimum: 1,
        duration: Some("At least 6 months"),
    },
    DisorderRow {
        id: "agoraphobia",
        name: "Agoraphobia",
        code: "F40.00",
        category: DsmCategory::Anxiety,
        description: "Marked fear about public spaces, crowds, or being outside alone",
        required: &["anx-18"],
        minimum: 1,
        duration: Some("At least 6 months"),
    },
    DisorderRow {
        id: "ptsd",
        name: "Post-Traumatic Stress Disorder",
        code: "F43.10",
        category: DsmCategory::Trauma,
        description: "Exposure to traumatic event with intrusion, avoidance, negative alterations, and arousal symptoms",
        required: &[
            "trm-1", "trm-2", "trm-3", "trm-4", "trm-5", "trm-6", "trm-7", "trm-8", "trm-9",
            "trm-10", "trm-11", "trm-12", "trm-13", "trm-14", "trm-15", "trm-16",
        ],
        minimum: 6,
        duration: Some("More than 1 month"),
    },
    DisorderRow {
        id: "acute-stress",
        name: "Acute Stress Disorder",
        code: "F43.0",
        category: DsmCategory::Trauma,
        description: "Similar to PTSD but occurring 3 days to 1 month after trauma",
        required: &[
            "trm-1", "trm-2", "trm-3", "trm-4", "trm-5", "trm-6", "trm-7", "trm-10", "trm-14",
            "trm-15",
        ],
        minimum: 5,
        duration: Some("3 days to 1 month after trauma"),
    },
    DisorderRow {
        id: "ocd",
        name: "Obsessive-Compulsive Disorder",
        code: "F42.2",
        category: DsmCategory::Ocd,
        description: "Presence of obsessions, compulsions, or both that are time-consuming",
        required: &["ocd-1", "ocd-2", "ocd-3", "ocd-4", "ocd-5", "ocd-6"],
        minimum: 2,
        duration: None,
    },
    DisorderRow {
        id: "trichotillomania",
        name: "Trichotillomania",
        code: "F63.3",
        category: DsmCategory::Ocd,
        description: "Recurrent pulling out of hair resulting in hair loss",
        required: &["ocd-7"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "excoriation",
        name: "Excoriation (Skin-Picking) Disorder",
        code: "L98.1",
        category: DsmCategory::Ocd,
        description: "Recurrent skin picking resulting in skin lesions",
        required: &["ocd-8"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "bdd",
        name: "Body Dysmorphic Disorder",
        code: "F45.22",
        category: DsmCategory::Ocd,
        description: "Preoccupation with perceived defects in physical appearance",
        required: &["ocd-9"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "bipolar-i",
        name: "Bipolar I Disorder",
        code: "F31.x",
        category: DsmCategory::Bipolar,
        description: "At least one manic episode, which may be preceded or followed by hypomanic or depressive episodes",
        required: &[
            "bip-1", "bip-2", "bip-3", "bip-4", "bip-5", "bip-6", "bip-7", "bip-8", "bip-9",
        ],
        minimum: 4,
        duration: Some("Manic episode lasting at least 1 week"),
    },
    DisorderRow {
        id: "bipolar-ii",
        name: "Bipolar II Disorder",
        code: "F31.81",
        category: DsmCategory::Bipolar,
        description: "At least one hypomanic episode and at least one major depressive episode",
        required: &[
            "bip-1", "bip-2", "bip-3", "bip-4", "bip-5", "bip-6", "bip-7", "bip-8", "bip-9",
            "bip-10",
        ],
        minimum: 4,
        duration: Some("Hypomanic episode lasting at least 4 days"),
    },
    DisorderRow {
        id: "schizophrenia",
        name: "Schizophrenia",
        code: "F20.9",
        category: DsmCategory::Psychotic,
        description: "Two or more characteristic symptoms, with continuous signs for at least 6 months",
        required: &["psy-1", "psy-2", "psy-3", "psy-4", "psy-5", "psy-6"],
        minimum: 2,
        duration: Some("At least 6 months"),
    },
    DisorderRow {
        id: "bpd",
        name: "Borderline Personality Disorder",
        code: "F60.3",
        category: DsmCategory::Personality,
        description: "Pattern of instability in interpersonal relationships, self-image, affects, and marked impulsivity",
        required: &[
            "per-1", "per-2", "per-3", "per-4", "per-5", "per-6", "per-7", "per-8", "per-9",
        ],
        minimum: 5,
        duration: None,
    },
    DisorderRow {
        id: "npd",
        name: "Narcissistic Personality Disorder",
        code: "F60.81",
        category: DsmCategory::Personality,
        description: "Pattern of grandiosity, need for admiration, and lack of empathy",
        required: &["per-10", "per-11", "per-12"],
        minimum: 3,
        duration: None,
    },
    DisorderRow {
        id: "aspd",
        name: "Antisocial Personality Disorder",
        code: "F60.2",
        category: DsmCategory::Personality,
        description: "Pattern of disregard for and violation of the rights of others",
        required: &["per-15", "per-3"],
        minimum: 2,
        duration: None,
    },
    DisorderRow {
        id: "anorexia",
        name: "Anorexia Nervosa",
        code: "F50.0x",
        category: DsmCategory::Eating,
        description: "Restriction of energy intake, intense fear of gaining weight, body image disturbance",
        required: &["eat-1", "eat-2", "eat-3"],
        minimum: 3,
        duration: None,
    },
    DisorderRow {
        id: "bulimia",
        name: "Bulimia Nervosa",
        code: "F50.2",
        category: DsmCategory::Eating,
        description: "Recurrent binge eating with compensatory behaviors",
        required: &["eat-4", "eat-5", "eat-6"],
        minimum: 3,
        duration: Some("At least once a week for 3 months"),
    },
    DisorderRow {
        id: "bed",
        name: "Binge-Eating Disorder",
        code: "F50.81",
        category: DsmCategory::Eating,
        description: "Recurrent episodes of binge eating without compensatory behaviors",
        required: &["eat-4"],
        minimum: 1,
        duration: Some("At least once a week for 3 months"),
    },
    DisorderRow {
        id: "sud",
        name: "Substance Use Disorder",
        code: "F1x.xx",
        category: DsmCategory::Substance,
        description: "Problematic pattern of substance use leading to clinically significant impairment",
        required: &[
            "sub-1", "sub-2", "sub-3", "sub-4", "sub-5", "sub-6", "sub-7", "sub-8", "sub-9",
            "sub-10",
        ],
        minimum: 2,
        duration: Some("Within a 12-month period"),
    },
    DisorderRow {
        id: "adhd-combined",
        name: "ADHD Combined Presentation",
        code: "F90.2",
        category: DsmCategory::Neurodevelopmental,
        description: "Meets criteria for both inattention and hyperactivity-impulsivity",
        required: &[
            "neu-1", "neu-2", "neu-3", "neu-4", "neu-5", "neu-6", "neu-7", "neu-8", "neu-9",
            "neu-10", "neu-11", "neu-12", "neu-13", "neu-14",
        ],
        minimum: 6,
        duration: Some("Symptoms present before age 12"),
    },
    DisorderRow {
        id: "adhd-inattentive",
        name: "ADHD Predominantly Inattentive",
        code: "F90.0",
        category: DsmCategory::Neurodevelopmental,
        description: "Meets criteria for inattention but not hyperactivity-impulsivity",
        required: &[
            "neu-1", "neu-3", "neu-4", "neu-5", "neu-6", "neu-7", "neu-8", "neu-9", "neu-10",
            "neu-11",
        ],
        minimum: 6,
        duration: Some("Symptoms present before age 12"),
    },
    DisorderRow {
        id: "insomnia",
        name: "Insomnia Disorder",
        code: "F51.01",
        category: DsmCategory::Sleep,
        description: "Predominant complaint of dissatisfaction with sleep quantity or quality",
        required: &["slp-1", "slp-2", "slp-3"],
        minimum: 1,
        duration: Some("At least 3 nights per week for at least 3 months"),
    },
    DisorderRow {
        id: "hypersomnolence",
        name: "Hypersomnolence Disorder",
        code: "F51.11",
        category: DsmCategory::Sleep,
        description: "Excessive sleepiness despite adequate sleep",
        required: &["slp-4"],
        minimum: 1,
        duration: Some("At least 3 times per week for at least 3 months"),
    },
    DisorderRow {
        id: "nightmare",
        name: "Nightmare Disorder",
        code: "F51.5",
        category: DsmCategory::Sleep,
        description: "Repeated occurrences of extended, dysphoric, well-remembered dreams",
        required: &["slp-5"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "dpdr",
        name: "Depersonalization/Derealization Disorder",
        code: "F48.1",
        category: DsmCategory::Dissociative,
        description: "Persistent experiences of depersonalization, derealization, or both",
        required: &["dis-1", "dis-2"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "dissociative-amnesia",
        name: "Dissociative Amnesia",
        code: "F44.0",
        category: DsmCategory::Dissociative,
        description: "Inability to recall important autobiographical information",
        required: &["dis-3"],
        minimum: 1,
        duration: None,
    },
    DisorderRow {
        id: "did",
        name: "Dissociative Identity Disorder",
        code: "F44.81",
        category: DsmCategory::Dissociative,
        description: "Disruption of identity characterized by two or more distinct personality states",
        required: &["dis-4", "dis-3"],
        minimum: 2,
        duration: None,
    },
];
