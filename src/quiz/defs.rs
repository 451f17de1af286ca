use crate::model::features::FeatureKey::{
    self, Journal, LocalSupport, Meditate, Music, Pray, PrayerWall, SleepRest,
};
use crate::model::features::FEATURE_COUNT;
use crate::model::quiz::{QUESTION_COUNT, QuizDestination, QuizOption, QuizQuestion};

const fn option(label: &'static str, points: &'static [(FeatureKey, u32)]) -> QuizOption {
    QuizOption { label, points }
}

static QUIZ_QUESTIONS: [QuizQuestion; QUESTION_COUNT] = [
    QuizQuestion {
        question: "What brought you here today?",
        options: [
            option("Going through a hard time", &[(Pray, 2), (LocalSupport, 1)]),
            option("Want to grow my faith", &[(Meditate, 2), (Journal, 1)]),
            option("Feeling anxious or stressed", &[(Music, 2), (Meditate, 1)]),
            option(
                "All of the above",
                &[(Pray, 1), (Journal, 1), (Meditate, 1), (Music, 1)],
            ),
        ],
    },
    QuizQuestion {
        question: "How are you feeling right now?",
        options: [
            option("I need comfort", &[(Pray, 2), (Music, 1)]),
            option("I feel stuck in my faith", &[(Meditate, 2), (Journal, 1)]),
            option("I'm okay but want more", &[(Journal, 2), (PrayerWall, 1)]),
            option("I'm doing well", &[(PrayerWall, 2), (Music, 1)]),
        ],
    },
    QuizQuestion {
        question: "What sounds most helpful?",
        options: [
            option("Prayer and scripture", &[(Pray, 3)]),
            option("Writing out my thoughts", &[(Journal, 3)]),
            option("Quiet reflection", &[(Meditate, 3)]),
            option("Worship music", &[(Music, 3)]),
        ],
    },
    QuizQuestion {
        question: "When do you most need support?",
        options: [
            option("Mornings", &[(Pray, 1), (Journal, 1)]),
            option("During stressful moments", &[(Pray, 1), (Music, 1)]),
            option("At night / bedtime", &[(SleepRest, 2), (Music, 1)]),
            option("Throughout the day", &[(Journal, 1), (PrayerWall, 1)]),
        ],
    },
    QuizQuestion {
        question: "What's your experience with faith practices?",
        options: [
            option("I practice regularly", &[(PrayerWall, 2), (Journal, 1)]),
            option("I try but not consistent", &[(Meditate, 1), (Music, 1)]),
            option("I used to but stopped", &[(Pray, 1), (Meditate, 1)]),
            option("I'm brand new", &[(Pray, 2), (LocalSupport, 1)]),
        ],
    },
];

static QUIZ_DESTINATIONS: [QuizDestination; FEATURE_COUNT] = [
    QuizDestination {
        key: Pray,
        name: "Prayer",
        route: "/scripture",
        cta_label: "Prayer",
        description: "It sounds like you could use a moment with God. Share what's on your heart and receive a personalized scripture and prayer.",
        verse: "Cast all your anxiety on him because he cares for you.",
        verse_reference: "1 Peter 5:7",
    },
    QuizDestination {
        key: Journal,
        name: "Journaling",
        route: "/journal",
        cta_label: "Journaling",
        description: "Writing is a powerful way to process your thoughts. Let guided prompts help you reflect on what God is doing in your life.",
        verse: "Search me, God, and know my heart; test me and know my anxious thoughts.",
        verse_reference: "Psalm 139:23",
    },
    QuizDestination {
        key: Meditate,
        name: "Meditation",
        route: "/meditate",
        cta_label: "Meditation",
        description: "A quiet moment of reflection can bring clarity and peace. Explore scripture-based meditations at your own pace.",
        verse: "Be still, and know that I am God.",
        verse_reference: "Psalm 46:10",
    },
    QuizDestination {
        key: Music,
        name: "Worship Music",
        route: "/music",
        cta_label: "Worship Music",
        description: "Sometimes worship music speaks when words can't. Let curated playlists meet you where you are.",
        verse: "Sing to the Lord a new song, for he has done marvelous things.",
        verse_reference: "Psalm 98:1",
    },
    QuizDestination {
        key: SleepRest,
        name: "Sleep & Rest",
        route: "/music/sleep",
        cta_label: "Sleep & Rest",
        description: "Nighttime can be the hardest. Let calming scripture and gentle sounds help you find rest.",
        verse: "In peace I will lie down and sleep, for you alone, Lord, make me dwell in safety.",
        verse_reference: "Psalm 4:8",
    },
    QuizDestination {
        key: PrayerWall,
        name: "Prayer Wall",
        route: "/prayer-wall",
        cta_label: "Prayer Wall",
        description: "You're not alone in this. See what others are praying for and find encouragement in community.",
        verse: "Carry each other\u{2019}s burdens, and in this way you will fulfill the law of Christ.",
        verse_reference: "Galatians 6:2",
    },
    QuizDestination {
        key: LocalSupport,
        name: "Local Support",
        route: "/churches",
        cta_label: "Local Support",
        description: "Sometimes the next step is a real conversation. Find churches and Christian counselors near you.",
        verse: "Where two or three gather in my name, there am I with them.",
        verse_reference: "Matthew 18:20",
    },
];

pub fn builtin_questions() -> &'static [QuizQuestion; QUESTION_COUNT] {
    &QUIZ_QUESTIONS
}

pub fn builtin_destinations() -> &'static [QuizDestination; FEATURE_COUNT] {
    &QUIZ_DESTINATIONS
}
