//! src/content.rs
//!
//! Everything the landing page displays besides the contact form.

pub const BRAND: &str = "Draw to Grow";
pub const LOGO_URL: &str = "https://ext.same-assets.com/2008172650/2719901219.png";
pub const FOOTER_LOGO_URL: &str = "https://ext.same-assets.com/2008172650/4092612351.png";
pub const FOOTER_NOTE: &str = "Draw to Grow. 2024. All rights reserved (c)";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAVIGATION: [NavLink; 6] = [
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "One-to-One", anchor: "about" },
    NavLink { label: "Team Building", anchor: "services" },
    NavLink { label: "Testimonials", anchor: "testimonials" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "YouTube",
        url: "https://www.youtube.com/@drawtogrow.studio",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/drawtogrow.studio",
    },
];

pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub lead: &'static str,
    pub call_to_action: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Release Emotions, Find Clarity, and Feel Lighter",
    highlight: "Using Art",
    lead: "Draw it out, let it go, and feel seen in a safe, creative space. Let your everyday \
        challenges take shape outside your mind through the process of therapeutic art \
        making\u{2014}no art skills needed.",
    call_to_action: "Book Your First Session",
    image_url: "https://ext.same-assets.com/2008172650/437042400.jpeg",
    image_alt: "Therapeutic art session",
};

pub const PAIN_POINTS_TITLE: &str = "Does this sound familiar?";

pub const PAIN_POINTS: [&str; 3] = [
    "You have an emotional block, mental fog, or heaviness in your heart and looking for clarity",
    "You crave a dedicated space and time to slow down, reflect, recharge and get creative",
    "You sense untapped potential within you and are searching for an intuitive way to access it",
];

pub struct About {
    pub title: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub paragraphs: [&'static str; 3],
    pub call_to_action: &'static str,
}

pub const ABOUT: About = About {
    title: "Hey, I'm Ksenia, your guide to self-discovery through art",
    image_url: "https://ext.same-assets.com/2008172650/2157720476.jpeg",
    image_alt: "Ksenia, therapeutic art facilitator",
    paragraphs: [
        "I'm a therapeutic art facilitator, certified neurographic art specialist, illustrator \
         (TooFaced Cosmetics, Marie-Chantal) and a mum. I'm also a highly sensitive person, so \
         if you are too\u{2014}I see you. I know what it's like to feel deeply, juggle \
         responsibilities, and carry big ambitions. But I've discovered that mindful art is a \
         powerful tool to find clarity, joy and even strength to move forward.",
        "I create a safe space for you to slow down, release emotions, get creative and access \
         your inner wisdom. No art skills needed\u{2014}I will guide you with art prompts and \
         you'll find the answers within. And whatever you share stays in the room\u{2014}no \
         judgment, just a space to be.",
        "These sessions aren't art therapy, but they're rooted in mindfulness techniques I've \
         learned through years of personal therapy, yoga, and spiritual exploration. You're in \
         safe hands\u{2014}my sessions are designed to leave you feeling grounded, light, and \
         resourceful.",
    ],
    call_to_action: "Book a session with me",
};

pub struct Service {
    pub title: &'static str,
    pub image_url: &'static str,
    pub tags: [&'static str; 3],
    pub description: &'static str,
    pub link_label: &'static str,
}

pub const SERVICES_TITLE: &str = "What I offer:";

pub const SERVICES: [Service; 3] = [
    Service {
        title: "One-to One Therapeutic Art Sessions (Online)",
        image_url: "https://ext.same-assets.com/2008172650/4014281557.png",
        tags: ["🏠 Online", "👤 1-on-1", "🎨 Creative"],
        description: "Discover the therapeutic power of art with one-on-one sessions designed \
            to support your personal journey, all from the comfort of your home.",
        link_label: "Learn More →",
    },
    Service {
        title: "Mindful Art Team Building & Private Events (UK)",
        image_url: "https://ext.same-assets.com/2008172650/3218310030.png",
        tags: ["👥 Groups", "🇬🇧 UK", "🎉 Events"],
        description: "Try a unique, art-based team-building activity to release stress, relax, \
            and reconnect with one another on a deeper level. Also perfect for special gatherings.",
        link_label: "Learn more →",
    },
    Service {
        title: "Women Circles (Crouch End)",
        image_url: "https://ext.same-assets.com/2008172650/1997344525.png",
        tags: ["👩‍👩‍👧‍👧 Women", "📍 Local", "🤱 Mum & Baby"],
        description: "Join a welcoming group of women for creative workshops that inspire \
            self-care and connection. I offer Mum and Baby classes, with new workshops coming soon.",
        link_label: "Follow our Instagram →",
    },
];

pub struct Benefit {
    pub title: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
}

pub const BENEFITS_TITLE: &str = "The Benefits Of Mindful Drawing";
pub const BENEFITS_CALL_TO_ACTION: &str = "Book Your Session";

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "Feel Good, Inside and Out",
        image_url: "https://ext.same-assets.com/2008172650/770990481.jpeg",
        description: "Mindful art making soothes your nervous system\u{2014}lowering stress \
            (cortisol) and boosting joy (dopamine). Your mind and body will thank you.",
    },
    Benefit {
        title: "See Clearly, Move Forward",
        image_url: "https://ext.same-assets.com/2008172650/556056855.jpeg",
        description: "Turn worries into art and give them shape outside your mind. With a fresh \
            perspective, creative solutions emerge naturally.",
    },
    Benefit {
        title: "Nurture Your True Self",
        image_url: "https://ext.same-assets.com/2008172650/1254509520.jpeg",
        description: "Step away from overthinking and give your soul the care it craves. Through \
            mindful drawing, connect with your higher self and feel compassion, creativity, and \
            inspiration.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    /// Without a portrait the first letter of `name` is shown instead.
    pub image_url: Option<&'static str>,
    pub quote: &'static str,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

pub const TESTIMONIALS_TITLE: &str = "Testimonials";

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Esme",
        role: "Musician and Mum",
        image_url: Some("https://ext.same-assets.com/2008172650/3169070644.png"),
        quote: "Ksenia is relaxing, attuned, informed and passionate guide. Drawing feelings as \
            shapes was helpful to me and discussing things as we go along is nice, Ksenia's \
            insights are often surprising in a good way, and helpful. I love the card bit at the \
            end, it's a nice witchy touch hehe, and brings a sense of destiny or like cosmic \
            provision on your journey - like someone/something is looking out for you. Also, I \
            wrote a song after our session! That hasn't happened in so long. Thank you ✨",
    },
    Testimonial {
        name: "Vic",
        role: "Product Designer at Monzo Bank",
        image_url: Some("https://ext.same-assets.com/2008172650/2217798346.png"),
        quote: "As someone who works full-time, I rarely find time for myself. The therapeutic \
            drawing sessions have been a game-changer\u{2014}allowing me to switch off from work, \
            destress, and focus on what really matters. I feel more balanced and centered after \
            every session.",
    },
    Testimonial {
        name: "Kate",
        role: "Career Coach and Mum of 2",
        image_url: Some("https://ext.same-assets.com/2008172650/1654505684.png"),
        quote: "I've had multiple Neurographic Art sessions with Kseniya, and each time it has \
            been an incredible experience. Not only do I enjoy the drawing process immensely, but \
            I'm also amazed at how my intentions unfold during the sessions. I always leave \
            feeling emotionally uplifted, with a newfound calm and clarity about the future.",
    },
    Testimonial {
        name: "Holly",
        role: "Writer, Performer and Mum",
        image_url: None,
        quote: "During my session with Kseniya, I was able to release something that had been \
            weighing on me for a long time. I gained insights I never thought possible, and for \
            the first time, I could imagine real change in an area I had felt stuck in. It was a \
            truly transformative experience.",
    },
];

pub const GALLERY_TITLE: &str = "Gallery";

pub const GALLERY: [&str; 4] = [
    "https://ext.same-assets.com/2008172650/4271719673.png",
    "https://ext.same-assets.com/2008172650/4187470022.gif",
    "https://ext.same-assets.com/2008172650/697814627.png",
    "https://ext.same-assets.com/2008172650/3181202917.png",
];

pub const CLOSING_QUOTE: &str = "Mindful Art is a key\u{2014}I hand it to you so you can open the \
    inner door that holds everything you need.";
pub const CLOSING_ATTRIBUTION: &str = "\u{2014} Ksenia, Draw To Grow";
pub const CLOSING_CALL_TO_ACTION: &str = "Book Your Creative Self-Care";

pub const CONTACT_TITLE: &str = "Happy to answer your questions";
