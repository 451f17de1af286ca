// Seed data for the Prayer Wall. Timestamps are RFC 3339, parsed once when
// the catalog is first touched.

#[derive(Debug, Clone, Copy)]
pub struct UserDef {
    pub id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub avatar_url: Option<&'static str>,
    pub bio: &'static str,
    pub joined_date: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PrayerDef {
    pub id: &'static str,
    pub user_id: Option<&'static str>,
    pub author_name: &'static str,
    pub author_avatar_url: Option<&'static str>,
    pub is_anonymous: bool,
    pub content: &'static str,
    pub answered_text: Option<&'static str>,
    pub answered_at: Option<&'static str>,
    pub created_at: &'static str,
    pub last_activity_at: &'static str,
    pub praying_count: u32,
    pub comment_count: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct CommentDef {
    pub id: &'static str,
    pub prayer_id: &'static str,
    pub user_id: &'static str,
    pub author_name: &'static str,
    pub author_avatar_url: Option<&'static str>,
    pub content: &'static str,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ReactionDef {
    pub prayer_id: &'static str,
    pub is_praying: bool,
    pub is_bookmarked: bool,
}

pub const CURRENT_USER_ID: &str = "user-1";

const USERS: &[UserDef] = &[
    UserDef {
        id: "user-1",
        first_name: "Sarah",
        last_name: "Johnson",
        avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        bio: "Wife, mother, and believer. Finding peace in prayer and gratitude every day.",
        joined_date: "2025-09-15T00:00:00Z",
    },
    UserDef {
        id: "user-2",
        first_name: "David",
        last_name: "Chen",
        avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        bio: "Worship leader at Grace Community Church. Music is my love language with God.",
        joined_date: "2025-11-01T00:00:00Z",
    },
    UserDef {
        id: "user-3",
        first_name: "Emily",
        last_name: "Rodriguez",
        avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        bio: "Seminary student. Passionate about scripture study and community prayer.",
        joined_date: "2026-01-05T00:00:00Z",
    },
    UserDef {
        id: "user-4",
        first_name: "James",
        last_name: "Mitchell",
        avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        bio: "Retired pastor. Still serving through prayer and encouragement.",
        joined_date: "2025-08-20T00:00:00Z",
    },
    UserDef {
        id: "user-5",
        first_name: "Rachel",
        last_name: "Kim",
        avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        bio: "Teacher and prayer warrior. Lifting up students and families daily.",
        joined_date: "2025-12-10T00:00:00Z",
    },
    UserDef {
        id: "user-6",
        first_name: "Michael",
        last_name: "Thompson",
        avatar_url: Some("https://i.pravatar.cc/150?u=user6"),
        bio: "New to faith. Finding my way one prayer at a time.",
        joined_date: "2026-02-01T00:00:00Z",
    },
    UserDef {
        id: "user-7",
        first_name: "Grace",
        last_name: "Okafor",
        avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        bio: "Nurse and mother of three. God sustains me through every shift.",
        joined_date: "2025-10-15T00:00:00Z",
    },
    UserDef {
        id: "user-8",
        first_name: "Daniel",
        last_name: "Park",
        avatar_url: None,
        bio: "College student navigating faith and life. Grateful for this community.",
        joined_date: "2026-01-20T00:00:00Z",
    },
    UserDef {
        id: "user-9",
        first_name: "Maria",
        last_name: "Santos",
        avatar_url: None,
        bio: "Grandmother of five. Every day is a blessing.",
        joined_date: "2025-07-01T00:00:00Z",
    },
    UserDef {
        id: "user-10",
        first_name: "Anonymous",
        last_name: "User",
        avatar_url: None,
        bio: "",
        joined_date: "2026-01-01T00:00:00Z",
    },
];

// Pre-sorted by last activity, newest first.
const PRAYERS: &[PrayerDef] = &[
    PrayerDef {
        id: "prayer-1",
        user_id: Some("user-1"),
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        is_anonymous: false,
        content: "Please pray for my mother who was just diagnosed with cancer. She starts chemo next week and we are all scared but trusting in God. She has been the rock of our family for 40 years and I cannot imagine life without her strength and love. We need a miracle.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-25T14:30:00Z",
        last_activity_at: "2026-02-26T10:15:00Z",
        praying_count: 47,
        comment_count: 12,
    },
    PrayerDef {
        id: "prayer-2",
        user_id: Some("user-2"),
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        is_anonymous: false,
        content: "Our church is going through a difficult transition with our lead pastor retiring. Please pray for unity, wisdom for the elders, and that God would send the right person to shepherd our congregation.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-24T09:00:00Z",
        last_activity_at: "2026-02-26T08:30:00Z",
        praying_count: 31,
        comment_count: 8,
    },
    PrayerDef {
        id: "prayer-3",
        user_id: None,
        author_name: "Anonymous",
        author_avatar_url: None,
        is_anonymous: true,
        content: "I am struggling with addiction and feel so alone. I know God can help me but I keep falling. Please pray that I find the strength to reach out for help and that God would surround me with people who care.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-25T22:00:00Z",
        last_activity_at: "2026-02-26T07:45:00Z",
        praying_count: 56,
        comment_count: 6,
    },
    PrayerDef {
        id: "prayer-4",
        user_id: Some("user-3"),
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        is_anonymous: false,
        content: "Pray for my finals this week. Trusting God with the results.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-26T06:00:00Z",
        last_activity_at: "2026-02-26T06:00:00Z",
        praying_count: 12,
        comment_count: 3,
    },
    PrayerDef {
        id: "prayer-5",
        user_id: Some("user-4"),
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        is_anonymous: false,
        content: "Praise God! After two years of infertility, my daughter and her husband are expecting their first child! Thank you to everyone who prayed with us. God is faithful.",
        answered_text: Some("We prayed for two years and God answered in His perfect timing. Baby is due in July. Our family is overjoyed and so grateful for this community."),
        answered_at: Some("2026-02-20T16:00:00Z"),
        created_at: "2024-03-10T12:00:00Z",
        last_activity_at: "2026-02-25T20:00:00Z",
        praying_count: 89,
        comment_count: 15,
    },
    PrayerDef {
        id: "prayer-6",
        user_id: Some("user-5"),
        author_name: "Rachel",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        is_anonymous: false,
        content: "One of my students lost their parent this week. Please pray for comfort and peace for the whole family. They need to know they are not alone.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-23T18:00:00Z",
        last_activity_at: "2026-02-25T16:30:00Z",
        praying_count: 38,
        comment_count: 5,
    },
    PrayerDef {
        id: "prayer-7",
        user_id: Some("user-6"),
        author_name: "Michael",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user6"),
        is_anonymous: false,
        content: "Starting a new job Monday. Nervous but grateful.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-25T10:00:00Z",
        last_activity_at: "2026-02-25T15:00:00Z",
        praying_count: 18,
        comment_count: 2,
    },
    PrayerDef {
        id: "prayer-8",
        user_id: Some("user-7"),
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        is_anonymous: false,
        content: "My husband lost his job last month and we are struggling to make ends meet. We have three young children and the bills are piling up. I am trying to trust God but the anxiety is overwhelming. Please pray for provision and for my husband to find work soon. We need doors to open.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-22T20:00:00Z",
        last_activity_at: "2026-02-25T12:00:00Z",
        praying_count: 42,
        comment_count: 10,
    },
    PrayerDef {
        id: "prayer-9",
        user_id: Some("user-8"),
        author_name: "Daniel",
        author_avatar_url: None,
        is_anonymous: false,
        content: "Feeling disconnected from God lately. Please pray that I can find my way back. I used to feel His presence so strongly and now everything feels quiet.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-24T22:00:00Z",
        last_activity_at: "2026-02-25T09:00:00Z",
        praying_count: 25,
        comment_count: 4,
    },
    PrayerDef {
        id: "prayer-10",
        user_id: Some("user-9"),
        author_name: "Maria",
        author_avatar_url: None,
        is_anonymous: false,
        content: "Thank you, Lord, for another beautiful day with my grandchildren. Praying for all the grandparents out there raising little ones. You are not forgotten.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-24T15:00:00Z",
        last_activity_at: "2026-02-24T15:00:00Z",
        praying_count: 15,
        comment_count: 2,
    },
    PrayerDef {
        id: "prayer-11",
        user_id: None,
        author_name: "Anonymous",
        author_avatar_url: None,
        is_anonymous: true,
        content: "Pray for my marriage. We need God to intervene.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-23T08:00:00Z",
        last_activity_at: "2026-02-24T11:00:00Z",
        praying_count: 33,
        comment_count: 3,
    },
    PrayerDef {
        id: "prayer-12",
        user_id: Some("user-1"),
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        is_anonymous: false,
        content: "God answered! My son got accepted into his dream college with a full scholarship. We have been praying about this for over a year. God is so good!",
        answered_text: Some("After months of waiting and praying, the acceptance letter came today. Full ride. We are in tears. Thank you to everyone who lifted us up."),
        answered_at: Some("2026-02-18T10:00:00Z"),
        created_at: "2025-11-15T12:00:00Z",
        last_activity_at: "2026-02-23T14:00:00Z",
        praying_count: 64,
        comment_count: 9,
    },
    PrayerDef {
        id: "prayer-13",
        user_id: Some("user-2"),
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        is_anonymous: false,
        content: "Please lift up our worship team. We have a big Easter service coming up and we want every note to glorify God. Pray for unity and anointing.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-21T14:00:00Z",
        last_activity_at: "2026-02-22T18:00:00Z",
        praying_count: 20,
        comment_count: 0,
    },
    PrayerDef {
        id: "prayer-14",
        user_id: Some("user-5"),
        author_name: "Rachel",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        is_anonymous: false,
        content: "Grateful for this community. You all lift me up.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-20T08:00:00Z",
        last_activity_at: "2026-02-20T08:00:00Z",
        praying_count: 8,
        comment_count: 1,
    },
    PrayerDef {
        id: "prayer-15",
        user_id: Some("user-3"),
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        is_anonymous: false,
        content: "My roommate is going through a really hard time and I do not know how to help. She is not a believer but she is open to prayer. Please pray that God opens her heart and that I can be the friend she needs right now without being pushy.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-19T20:00:00Z",
        last_activity_at: "2026-02-20T06:00:00Z",
        praying_count: 22,
        comment_count: 4,
    },
    PrayerDef {
        id: "prayer-16",
        user_id: Some("user-7"),
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        is_anonymous: false,
        content: "UPDATE: My husband got a job offer today! It is even better than his last position. God provided exactly when we needed it most. Thank you all for praying with us!",
        answered_text: Some("Three weeks of uncertainty and God came through. Better pay, better hours, closer to home. He truly works all things for good."),
        answered_at: Some("2026-02-15T17:00:00Z"),
        created_at: "2026-01-28T12:00:00Z",
        last_activity_at: "2026-02-18T09:00:00Z",
        praying_count: 51,
        comment_count: 7,
    },
    PrayerDef {
        id: "prayer-17",
        user_id: Some("user-4"),
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        is_anonymous: false,
        content: "Pray for the persecuted church around the world. So many believers are suffering for their faith. May God strengthen them and protect them.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-15T07:00:00Z",
        last_activity_at: "2026-02-17T12:00:00Z",
        praying_count: 35,
        comment_count: 2,
    },
    PrayerDef {
        id: "prayer-18",
        user_id: Some("user-6"),
        author_name: "Michael",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user6"),
        is_anonymous: false,
        content: "Just got baptized last Sunday! Best decision of my life. Thank you to this community for helping me find my way to faith. I never thought I would be here but God had other plans.",
        answered_text: None,
        answered_at: None,
        created_at: "2026-02-10T16:00:00Z",
        last_activity_at: "2026-02-14T20:00:00Z",
        praying_count: 72,
        comment_count: 11,
    },
];

const COMMENTS: &[CommentDef] = &[
    CommentDef {
        id: "comment-1",
        prayer_id: "prayer-1",
        user_id: "user-2",
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        content: "Lifting your mother up in prayer right now. God is the great healer.",
        created_at: "2026-02-26T10:15:00Z",
    },
    CommentDef {
        id: "comment-2",
        prayer_id: "prayer-1",
        user_id: "user-3",
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        content: "@Sarah Standing with you in prayer. Psalm 46:1 — God is our refuge and strength.",
        created_at: "2026-02-26T09:30:00Z",
    },
    CommentDef {
        id: "comment-3",
        prayer_id: "prayer-1",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "Lord, be with this family. Wrap them in Your peace. Amen.",
        created_at: "2026-02-26T08:00:00Z",
    },
    CommentDef {
        id: "comment-4",
        prayer_id: "prayer-1",
        user_id: "user-5",
        author_name: "Rachel",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        content: "Praying for complete healing. Keep trusting.",
        created_at: "2026-02-25T22:30:00Z",
    },
    CommentDef {
        id: "comment-5",
        prayer_id: "prayer-1",
        user_id: "user-7",
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        content: "@Sarah As a nurse, I have seen miracles happen. Keep your faith strong. Praying for your mom.",
        created_at: "2026-02-25T21:00:00Z",
    },
    CommentDef {
        id: "comment-6",
        prayer_id: "prayer-1",
        user_id: "user-9",
        author_name: "Maria",
        author_avatar_url: None,
        content: "My heart goes out to you, dear. Praying without ceasing.",
        created_at: "2026-02-25T19:00:00Z",
    },
    CommentDef {
        id: "comment-7",
        prayer_id: "prayer-1",
        user_id: "user-8",
        author_name: "Daniel",
        author_avatar_url: None,
        content: "God is bigger than any diagnosis. Believing with you.",
        created_at: "2026-02-25T18:00:00Z",
    },
    CommentDef {
        id: "comment-8",
        prayer_id: "prayer-1",
        user_id: "user-6",
        author_name: "Michael",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user6"),
        content: "Praying for strength for the whole family.",
        created_at: "2026-02-25T17:00:00Z",
    },
    CommentDef {
        id: "comment-9",
        prayer_id: "prayer-2",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "As a retired pastor, transitions are hard but God always provides. Praying for your elders.",
        created_at: "2026-02-26T08:30:00Z",
    },
    CommentDef {
        id: "comment-10",
        prayer_id: "prayer-2",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "@David Praying for your church family. God has someone perfect in mind.",
        created_at: "2026-02-25T20:00:00Z",
    },
    CommentDef {
        id: "comment-11",
        prayer_id: "prayer-2",
        user_id: "user-3",
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        content: "Unity in the body of Christ is so important. Lifting this up.",
        created_at: "2026-02-25T15:00:00Z",
    },
    CommentDef {
        id: "comment-12",
        prayer_id: "prayer-3",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "You are not alone in this fight. God sees you and loves you exactly where you are. One step at a time.",
        created_at: "2026-02-26T07:45:00Z",
    },
    CommentDef {
        id: "comment-13",
        prayer_id: "prayer-3",
        user_id: "user-7",
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        content: "Praying for freedom and healing. Reach out to someone you trust today.",
        created_at: "2026-02-26T06:00:00Z",
    },
    CommentDef {
        id: "comment-14",
        prayer_id: "prayer-3",
        user_id: "user-2",
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        content: "Romans 8:38-39 — nothing can separate you from the love of God. Keep fighting.",
        created_at: "2026-02-26T01:00:00Z",
    },
    CommentDef {
        id: "comment-15",
        prayer_id: "prayer-4",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "You got this, Emily! Praying for peace and focus.",
        created_at: "2026-02-26T07:00:00Z",
    },
    CommentDef {
        id: "comment-16",
        prayer_id: "prayer-4",
        user_id: "user-9",
        author_name: "Maria",
        author_avatar_url: None,
        content: "@Emily Praying for you sweetheart. Do your best and leave the rest to God.",
        created_at: "2026-02-26T06:30:00Z",
    },
    CommentDef {
        id: "comment-17",
        prayer_id: "prayer-4",
        user_id: "user-8",
        author_name: "Daniel",
        author_avatar_url: None,
        content: "Same here! Finals are stressful. We can do this.",
        created_at: "2026-02-26T06:15:00Z",
    },
    CommentDef {
        id: "comment-18",
        prayer_id: "prayer-5",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "This makes my heart so full! Congratulations to your daughter!",
        created_at: "2026-02-20T17:00:00Z",
    },
    CommentDef {
        id: "comment-19",
        prayer_id: "prayer-5",
        user_id: "user-7",
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        content: "@James What beautiful news! God is so faithful. Praying for a healthy pregnancy.",
        created_at: "2026-02-20T18:00:00Z",
    },
    CommentDef {
        id: "comment-20",
        prayer_id: "prayer-6",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "Lord, comfort this child and their family. Be their strength.",
        created_at: "2026-02-25T16:30:00Z",
    },
    CommentDef {
        id: "comment-21",
        prayer_id: "prayer-6",
        user_id: "user-3",
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        content: "@Rachel You are such a caring teacher. Praying for your student.",
        created_at: "2026-02-24T10:00:00Z",
    },
    CommentDef {
        id: "comment-22",
        prayer_id: "prayer-7",
        user_id: "user-2",
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        content: "You will do great! Praying for confidence and favor.",
        created_at: "2026-02-25T15:00:00Z",
    },
    CommentDef {
        id: "comment-23",
        prayer_id: "prayer-7",
        user_id: "user-5",
        author_name: "Rachel",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        content: "New beginnings are exciting! God has great plans for you.",
        created_at: "2026-02-25T12:00:00Z",
    },
    CommentDef {
        id: "comment-24",
        prayer_id: "prayer-8",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "@Grace My family went through the same thing. God will provide. Philippians 4:19.",
        created_at: "2026-02-25T12:00:00Z",
    },
    CommentDef {
        id: "comment-25",
        prayer_id: "prayer-8",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "Praying for provision and peace. God has not forgotten you.",
        created_at: "2026-02-24T08:00:00Z",
    },
    CommentDef {
        id: "comment-26",
        prayer_id: "prayer-9",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "Spiritual dry seasons happen to everyone. Keep seeking Him. He is closer than you think.",
        created_at: "2026-02-25T09:00:00Z",
    },
    CommentDef {
        id: "comment-27",
        prayer_id: "prayer-9",
        user_id: "user-3",
        author_name: "Emily",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user3"),
        content: "@Daniel I have been there. Sometimes silence is where God does His deepest work. Praying for you.",
        created_at: "2026-02-25T07:00:00Z",
    },
    CommentDef {
        id: "comment-28",
        prayer_id: "prayer-10",
        user_id: "user-5",
        author_name: "Rachel",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user5"),
        content: "What a beautiful heart you have, Maria. Blessings to you and your grandchildren!",
        created_at: "2026-02-24T16:00:00Z",
    },
    CommentDef {
        id: "comment-29",
        prayer_id: "prayer-11",
        user_id: "user-9",
        author_name: "Maria",
        author_avatar_url: None,
        content: "Marriage is worth fighting for. Praying God restores what feels broken.",
        created_at: "2026-02-24T11:00:00Z",
    },
    CommentDef {
        id: "comment-30",
        prayer_id: "prayer-15",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "@Emily Just be present. Sometimes the best witness is a faithful friend.",
        created_at: "2026-02-20T06:00:00Z",
    },
    CommentDef {
        id: "comment-31",
        prayer_id: "prayer-15",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "Praying for open doors and open hearts.",
        created_at: "2026-02-19T22:00:00Z",
    },
    CommentDef {
        id: "comment-32",
        prayer_id: "prayer-16",
        user_id: "user-2",
        author_name: "David",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user2"),
        content: "God is so good! Rejoicing with you!",
        created_at: "2026-02-18T09:00:00Z",
    },
    CommentDef {
        id: "comment-33",
        prayer_id: "prayer-18",
        user_id: "user-1",
        author_name: "Sarah",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user1"),
        content: "@Michael Welcome to the family! This is the best news!",
        created_at: "2026-02-14T20:00:00Z",
    },
    CommentDef {
        id: "comment-34",
        prayer_id: "prayer-18",
        user_id: "user-4",
        author_name: "James",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user4"),
        content: "The angels are celebrating with you! What a journey. Praise God.",
        created_at: "2026-02-11T10:00:00Z",
    },
    CommentDef {
        id: "comment-35",
        prayer_id: "prayer-18",
        user_id: "user-7",
        author_name: "Grace",
        author_avatar_url: Some("https://i.pravatar.cc/150?u=user7"),
        content: "Tears of joy reading this. God changes lives!",
        created_at: "2026-02-10T20:00:00Z",
    },
];

// Reactions of the signed-in mock user.
const REACTIONS: &[ReactionDef] = &[
    ReactionDef {
        prayer_id: "prayer-1",
        is_praying: true,
        is_bookmarked: true,
    },
    ReactionDef {
        prayer_id: "prayer-3",
        is_praying: true,
        is_bookmarked: false,
    },
    ReactionDef {
        prayer_id: "prayer-5",
        is_praying: true,
        is_bookmarked: true,
    },
    ReactionDef {
        prayer_id: "prayer-8",
        is_praying: false,
        is_bookmarked: false,
    },
    ReactionDef {
        prayer_id: "prayer-12",
        is_praying: true,
        is_bookmarked: true,
    },
    ReactionDef {
        prayer_id: "prayer-18",
        is_praying: true,
        is_bookmarked: false,
    },
];

pub fn builtin_users() -> &'static [UserDef] {
    USERS
}

pub fn builtin_prayers() -> &'static [PrayerDef] {
    PRAYERS
}

pub fn builtin_comments() -> &'static [CommentDef] {
    COMMENTS
}

pub fn builtin_reactions() -> &'static [ReactionDef] {
    REACTIONS
}
