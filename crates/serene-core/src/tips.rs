/// Static self-care tips shown on the tips view.
pub const TIPS: &[&str] = &[
    "Drink a glass of water 💧",
    "Take a short walk outside 🚶",
    "Stretch for five minutes 🧘",
    "Put your phone away for an hour 📵",
    "Write down three things you're grateful for ✍️",
    "Call or message someone you care about 📞",
    "Get some sunlight ☀️",
    "Go to bed a little earlier tonight 😴",
];
