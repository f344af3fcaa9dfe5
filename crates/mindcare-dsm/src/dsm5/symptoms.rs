use crate::catalog::DsmCategory;

/// Symptom rows as `(id, name, description)`, grouped by category.
pub(super) const SYMPTOMS: &[(DsmCategory, &[(&str, &str, &str)])] = &[
    (
        DsmCategory::Depressive,
        &[
            (
                "dep-1",
                "Depressed Mood",
                "Feeling sad, empty, hopeless, or appearing tearful most of the day, nearly every day",
            ),
            (
                "dep-2",
                "Anhedonia",
                "Markedly diminished interest or pleasure in all, or almost all, activities",
            ),
            (
                "dep-3",
                "Weight/Appetite Changes",
                "Significant weight loss/gain or decrease/increase in appetite nearly every day",
            ),
            ("dep-4", "Sleep Disturbance", "Insomnia or hypersomnia nearly every day"),
            (
                "dep-5",
                "Psychomotor Changes",
                "Psychomotor agitation or retardation observable by others",
            ),
            ("dep-6", "Fatigue", "Fatigue or loss of energy nearly every day"),
            (
                "dep-7",
                "Worthlessness/Guilt",
                "Feelings of worthlessness or excessive/inappropriate guilt",
            ),
            (
                "dep-8",
                "Concentration Difficulties",
                "Diminished ability to think, concentrate, or indecisiveness",
            ),
            (
                "dep-9",
                "Suicidal Ideation",
                "Recurrent thoughts of death, suicidal ideation, or suicide attempt",
            ),
            (
                "dep-10",
                "Persistent Depressed Mood",
                "Depressed mood for most of the day, more days than not, for at least 2 years",
            ),
        ],
    ),
    (
        DsmCategory::Anxiety,
        &[
            (
                "anx-1",
                "Excessive Worry",
                "Excessive anxiety and worry about multiple events/activities",
            ),
            ("anx-2", "Difficulty Controlling Worry", "Finding it difficult to control the worry"),
            ("anx-3", "Restlessness", "Feeling restless, keyed up, or on edge"),
            ("anx-4", "Easily Fatigued", "Being easily fatigued"),
            ("anx-5", "Difficulty Concentrating", "Difficulty concentrating or mind going blank"),
            ("anx-6", "Irritability", "Irritability"),
            ("anx-7", "Muscle Tension", "Muscle tension"),
            (
                "anx-8",
                "Sleep Problems",
                "Sleep disturbance (difficulty falling/staying asleep, restless sleep)",
            ),
            (
                "anx-9",
                "Panic Attacks",
                "Recurrent unexpected panic attacks with intense fear/discomfort",
            ),
            (
                "anx-10",
                "Worry About Future Attacks",
                "Persistent concern about additional panic attacks or their consequences",
            ),
            ("anx-11", "Palpitations", "Palpitations, pounding heart, or accelerated heart rate"),
            ("anx-12", "Sweating", "Sweating during anxiety episodes"),
            ("anx-13", "Trembling", "Trembling or shaking"),
            ("anx-14", "Shortness of Breath", "Sensations of shortness of breath or smothering"),
            (
                "anx-15",
                "Social Fear",
                "Marked fear about social situations with potential scrutiny",
            ),
            (
                "anx-16",
                "Social Avoidance",
                "Social situations are avoided or endured with intense fear",
            ),
            (
                "anx-17",
                "Specific Phobia",
                "Marked fear or anxiety about a specific object or situation",
            ),
            (
                "anx-18",
                "Agoraphobia",
                "Marked fear about public transportation, open/enclosed spaces, crowds, or being outside alone",
            ),
        ],
    ),
    (
        DsmCategory::Trauma,
        &[
            (
                "trm-1",
                "Trauma Exposure",
                "Exposure to actual or threatened death, serious injury, or sexual violence",
            ),
            (
                "trm-2",
                "Intrusive Memories",
                "Recurrent, involuntary, and intrusive distressing memories of the event",
            ),
            (
                "trm-3",
                "Trauma Nightmares",
                "Recurrent distressing dreams related to the traumatic event",
            ),
            (
                "trm-4",
                "Flashbacks",
                "Dissociative reactions (flashbacks) where the person feels the event is recurring",
            ),
            (
                "trm-5",
                "Psychological Distress",
                "Intense psychological distress at exposure to trauma cues",
            ),
            (
                "trm-6",
                "Avoidance of Memories",
                "Avoidance of distressing memories, thoughts, or feelings about the trauma",
            ),
            (
                "trm-7",
                "Avoidance of Reminders",
                "Avoidance of external reminders that arouse distressing memories",
            ),
            (
                "trm-8",
                "Negative Beliefs",
                "Persistent negative beliefs about oneself, others, or the world",
            ),
            (
                "trm-9",
                "Distorted Blame",
                "Persistent distorted cognitions about cause or consequences leading to blame",
            ),
            (
                "trm-10",
                "Negative Emotional State",
                "Persistent negative emotional state (fear, horror, anger, guilt, shame)",
            ),
            (
                "trm-11",
                "Diminished Interest",
                "Markedly diminished interest in significant activities",
            ),
            ("trm-12", "Detachment", "Feelings of detachment or estrangement from others"),
            (
                "trm-13",
                "Inability to Feel Positive",
                "Persistent inability to experience positive emotions",
            ),
            ("trm-14", "Hypervigilance", "Hypervigilance"),
            ("trm-15", "Exaggerated Startle", "Exaggerated startle response"),
            ("trm-16", "Reckless Behavior", "Reckless or self-destructive behavior"),
        ],
    ),
    (
        DsmCategory::Ocd,
        &[
            (
                "ocd-1",
                "Obsessions",
                "Recurrent, persistent, intrusive thoughts, urges, or images causing anxiety",
            ),
            (
                "ocd-2",
                "Compulsions",
                "Repetitive behaviors or mental acts performed to reduce anxiety",
            ),
            ("ocd-3", "Time-Consuming", "Obsessions/compulsions are time-consuming (>1 hour/day)"),
            ("ocd-4", "Contamination Fears", "Obsessive fears of contamination"),
            ("ocd-5", "Checking Behaviors", "Compulsive checking behaviors"),
            ("ocd-6", "Ordering/Symmetry", "Need for symmetry, ordering, or exactness"),
            ("ocd-7", "Hair Pulling", "Recurrent pulling out of hair resulting in hair loss"),
            ("ocd-8", "Skin Picking", "Recurrent skin picking resulting in skin lesions"),
            (
                "ocd-9",
                "Body Dysmorphic Concerns",
                "Preoccupation with perceived defects in physical appearance",
            ),
        ],
    ),
    (
        DsmCategory::Bipolar,
        &[
            ("bip-1", "Elevated Mood", "Abnormally elevated, expansive, or irritable mood"),
            ("bip-2", "Increased Energy", "Abnormally increased goal-directed activity or energy"),
            ("bip-3", "Inflated Self-Esteem", "Inflated self-esteem or grandiosity"),
            (
                "bip-4",
                "Decreased Sleep Need",
                "Decreased need for sleep (feels rested after few hours)",
            ),
            ("bip-5", "Pressured Speech", "More talkative than usual or pressure to keep talking"),
            ("bip-6", "Racing Thoughts", "Flight of ideas or racing thoughts"),
            ("bip-7", "Distractibility", "Distractibility reported or observed"),
            (
                "bip-8",
                "Increased Activity",
                "Increase in goal-directed activity or psychomotor agitation",
            ),
            (
                "bip-9",
                "Risky Behavior",
                "Excessive involvement in activities with high potential for painful consequences",
            ),
            (
                "bip-10",
                "Mood Cycling",
                "Distinct periods of mood disturbance cycling between depression and mania/hypomania",
            ),
        ],
    ),
    (
        DsmCategory::Psychotic,
        &[
            (
                "psy-1",
                "Delusions",
                "Fixed beliefs not amenable to change despite conflicting evidence",
            ),
            ("psy-2", "Hallucinations", "Perception-like experiences without external stimulus"),
            ("psy-3", "Disorganized Speech", "Disorganized speech (derailment, incoherence)"),
            ("psy-4", "Disorganized Behavior", "Grossly disorganized or catatonic behavior"),
            (
                "psy-5",
                "Negative Symptoms",
                "Negative symptoms (diminished emotional expression, avolition)",
            ),
            (
                "psy-6",
                "Social/Occupational Dysfunction",
                "Level of functioning markedly below prior achievement level",
            ),
        ],
    ),
    (
        DsmCategory::Personality,
        &[
            (
                "per-1",
                "Unstable Relationships",
                "Pattern of unstable, intense interpersonal relationships",
            ),
            ("per-2", "Identity Disturbance", "Markedly unstable self-image or sense of self"),
            ("per-3", "Impulsivity", "Impulsivity in potentially self-damaging areas"),
            (
                "per-4",
                "Suicidal/Self-Harm Behaviors",
                "Recurrent suicidal behavior, gestures, threats, or self-mutilating behavior",
            ),
            (
                "per-5",
                "Affective Instability",
                "Affective instability due to marked mood reactivity",
            ),
            ("per-6", "Chronic Emptiness", "Chronic feelings of emptiness"),
            (
                "per-7",
                "Inappropriate Anger",
                "Inappropriate, intense anger or difficulty controlling anger",
            ),
            (
                "per-8",
                "Paranoid Ideation",
                "Transient, stress-related paranoid ideation or dissociative symptoms",
            ),
            (
                "per-9",
                "Fear of Abandonment",
                "Frantic efforts to avoid real or imagined abandonment",
            ),
            ("per-10", "Grandiosity", "Grandiose sense of self-importance"),
            ("per-11", "Need for Admiration", "Need for excessive admiration"),
            (
                "per-12",
                "Lack of Empathy",
                "Lack of empathy, unwilling to recognize feelings of others",
            ),
            (
                "per-13",
                "Social Detachment",
                "Detachment from social relationships, restricted emotional expression",
            ),
            ("per-14", "Suspiciousness", "Pervasive distrust and suspiciousness of others"),
            (
                "per-15",
                "Disregard for Others",
                "Disregard for and violation of the rights of others",
            ),
        ],
    ),
    (
        DsmCategory::Eating,
        &[
            (
                "eat-1",
                "Restriction of Intake",
                "Restriction of energy intake leading to significantly low body weight",
            ),
            ("eat-2", "Fear of Weight Gain", "Intense fear of gaining weight or becoming fat"),
            (
                "eat-3",
                "Body Image Disturbance",
                "Disturbance in body weight/shape experience or denial of seriousness",
            ),
            (
                "eat-4",
                "Binge Eating",
                "Recurrent episodes of eating large amounts with lack of control",
            ),
            (
                "eat-5",
                "Compensatory Behaviors",
                "Recurrent compensatory behaviors to prevent weight gain",
            ),
            (
                "eat-6",
                "Self-Evaluation by Shape",
                "Self-evaluation unduly influenced by body shape and weight",
            ),
        ],
    ),
    (
        DsmCategory::Substance,
        &[
            (
                "sub-1",
                "Larger Amounts/Longer",
                "Substance taken in larger amounts or over longer period than intended",
            ),
            (
                "sub-2",
                "Unsuccessful Control",
                "Persistent desire or unsuccessful efforts to cut down/control use",
            ),
            (
                "sub-3",
                "Time Spent",
                "Great deal of time spent obtaining, using, or recovering from substance",
            ),
            ("sub-4", "Craving", "Craving or strong desire to use the substance"),
            (
                "sub-5",
                "Role Obligation Failure",
                "Recurrent use resulting in failure to fulfill major role obligations",
            ),
            (
                "sub-6",
                "Continued Despite Problems",
                "Continued use despite persistent social/interpersonal problems",
            ),
            (
                "sub-7",
                "Activities Given Up",
                "Important activities given up or reduced because of use",
            ),
            ("sub-8", "Hazardous Use", "Recurrent use in physically hazardous situations"),
            ("sub-9", "Tolerance", "Tolerance (need for increased amounts or diminished effect)"),
            ("sub-10", "Withdrawal", "Withdrawal symptoms or use to relieve/avoid withdrawal"),
        ],
    ),
    (
        DsmCategory::Neurodevelopmental,
        &[
            (
                "neu-1",
                "Inattention",
                "Pattern of inattention interfering with functioning/development",
            ),
            (
                "neu-2",
                "Hyperactivity",
                "Pattern of hyperactivity-impulsivity interfering with functioning",
            ),
            (
                "neu-3",
                "Careless Mistakes",
                "Often fails to give close attention or makes careless mistakes",
            ),
            (
                "neu-4",
                "Difficulty Sustaining Attention",
                "Difficulty sustaining attention in tasks or play",
            ),
            ("neu-5", "Does Not Listen", "Often does not seem to listen when spoken to directly"),
            (
                "neu-6",
                "Fails to Finish",
                "Often fails to follow through on instructions or finish tasks",
            ),
            (
                "neu-7",
                "Organization Difficulty",
                "Often has difficulty organizing tasks and activities",
            ),
            (
                "neu-8",
                "Avoids Sustained Effort",
                "Often avoids tasks requiring sustained mental effort",
            ),
            ("neu-9", "Loses Things", "Often loses things necessary for tasks or activities"),
            ("neu-10", "Easily Distracted", "Often easily distracted by extraneous stimuli"),
            ("neu-11", "Forgetful", "Often forgetful in daily activities"),
            ("neu-12", "Fidgets", "Often fidgets or squirms in seat"),
            (
                "neu-13",
                "Leaves Seat",
                "Often leaves seat in situations where remaining seated is expected",
            ),
            (
                "neu-14",
                "Runs/Climbs Excessively",
                "Often runs about or climbs in inappropriate situations",
            ),
        ],
    ),
    (
        DsmCategory::Sleep,
        &[
            ("slp-1", "Difficulty Initiating Sleep", "Difficulty initiating sleep"),
            ("slp-2", "Difficulty Maintaining Sleep", "Difficulty maintaining sleep"),
            (
                "slp-3",
                "Early Awakening",
                "Early-morning awakening with inability to return to sleep",
            ),
            (
                "slp-4",
                "Excessive Sleepiness",
                "Excessive sleepiness despite main sleep period of 7+ hours",
            ),
            (
                "slp-5",
                "Nightmares",
                "Repeated occurrences of extended, dysphoric, well-remembered dreams",
            ),
        ],
    ),
    (
        DsmCategory::Dissociative,
        &[
            (
                "dis-1",
                "Depersonalization",
                "Experiences of unreality or detachment from mind, self, or body",
            ),
            ("dis-2", "Derealization", "Experiences of unreality of surroundings"),
            (
                "dis-3",
                "Dissociative Amnesia",
                "Inability to recall important autobiographical information",
            ),
            (
                "dis-4",
                "Identity Disruption",
                "Disruption of identity characterized by two or more distinct personality states",
            ),
        ],
    ),
];
