use std::sync::LazyLock;

use crate::quiz::{Answer, Question};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            1,
            "What's your ideal Saturday morning?",
            "☀️",
            vec![
                Answer::new("Dawn patrol surfing", &[("mozz-pure", 2), ("white-cheese", 1)]),
                Answer::new(
                    "Sleeping in, then brunch",
                    &[("white-cheese", 2), ("cheddar-beddar", 1)],
                ),
                Answer::new(
                    "Skating the empty park",
                    &[("cheddar-beddar", 2), ("orange-spice", 1)],
                ),
                Answer::new(
                    "Hot yoga then a habanero smoothie",
                    &[("mega-spice", 2), ("orange-spice", 1)],
                ),
            ],
        ),
        Question::new(
            2,
            "Pick your road trip soundtrack",
            "🎵",
            vec![
                Answer::new("Chill lo-fi beats", &[("white-cheese", 2), ("mozz-pure", 1)]),
                Answer::new("Classic punk rock", &[("cheddar-beddar", 2), ("mega-spice", 1)]),
                Answer::new("Reggae and good vibes", &[("orange-spice", 2), ("mozz-pure", 1)]),
                Answer::new(
                    "Death metal at max volume",
                    &[("mega-spice", 2), ("cheddar-beddar", 1)],
                ),
            ],
        ),
        Question::new(
            3,
            "Your dream vacation is...",
            "✈️",
            vec![
                Answer::new("Beach house, no plans", &[("mozz-pure", 2), ("white-cheese", 1)]),
                Answer::new("Food tour through Mexico", &[("orange-spice", 2), ("mega-spice", 1)]),
                Answer::new(
                    "Skateboarding through European cities",
                    &[("cheddar-beddar", 2), ("orange-spice", 1)],
                ),
                Answer::new("Volcano hiking in Iceland", &[("mega-spice", 2), ("mozz-pure", 1)]),
            ],
        ),
        Question::new(
            4,
            "How do you take your coffee?",
            "☕",
            vec![
                Answer::new("Oat milk latte, simple", &[("white-cheese", 2), ("mozz-pure", 1)]),
                Answer::new(
                    "Black with one sugar",
                    &[("cheddar-beddar", 2), ("orange-spice", 1)],
                ),
                Answer::new(
                    "Cold brew with caramel",
                    &[("orange-spice", 2), ("white-cheese", 1)],
                ),
                Answer::new(
                    "Espresso shot — make it a triple",
                    &[("mega-spice", 2), ("cheddar-beddar", 1)],
                ),
            ],
        ),
        Question::new(
            5,
            "What's your go-to party move?",
            "🎉",
            vec![
                Answer::new(
                    "Bring a charcuterie board",
                    &[("white-cheese", 2), ("cheddar-beddar", 1)],
                ),
                Answer::new(
                    "DJ and never leave the aux",
                    &[("orange-spice", 2), ("mozz-pure", 1)],
                ),
                Answer::new(
                    "Challenge everyone to arm wrestling",
                    &[("mega-spice", 2), ("cheddar-beddar", 1)],
                ),
                Answer::new(
                    "Find the dog and hang with it all night",
                    &[("mozz-pure", 2), ("white-cheese", 1)],
                ),
            ],
        ),
        Question::new(
            6,
            "Pick a Tim's Nacho Cheese slogan",
            "📣",
            vec![
                Answer::new(
                    "Keep it real, keep it cheesy",
                    &[("white-cheese", 2), ("orange-spice", 1)],
                ),
                Answer::new("Smooth moves only", &[("mozz-pure", 2), ("white-cheese", 1)]),
                Answer::new(
                    "Bold flavors, no apologies",
                    &[("cheddar-beddar", 2), ("orange-spice", 1)],
                ),
                Answer::new(
                    "If you can't handle the heat...",
                    &[("mega-spice", 2), ("cheddar-beddar", 1)],
                ),
            ],
        ),
        Question::new(
            7,
            "Your Vans style?",
            "👟",
            vec![
                Answer::new("Classic white slip-ons", &[("white-cheese", 2), ("mozz-pure", 1)]),
                Answer::new(
                    "Checkered old skools",
                    &[("orange-spice", 2), ("cheddar-beddar", 1)],
                ),
                Answer::new(
                    "Custom painted by a friend",
                    &[("mozz-pure", 2), ("cheddar-beddar", 1)],
                ),
                Answer::new(
                    "Whatever survived the last mosh pit",
                    &[("mega-spice", 2), ("orange-spice", 1)],
                ),
            ],
        ),
    ]
});

/// The standard personality quiz: 7 questions, 4 answers each, always in
/// the same order.
pub fn load_questions() -> &'static [Question] {
    &QUESTIONS
}
