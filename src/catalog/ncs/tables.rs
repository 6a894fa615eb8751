//! Built-in genre and mood filter ids used by the ncs.io search form.
//!
//! These can be replaced from the `[genres]` and `[moods]` tables of the
//! config file when ncs.io renumbers its filters.

use crate::catalog::Enumeration;

const GENRES: &[(&str, u32)] = &[
    ("AlternativeDance", 31),
    ("Bass", 1),
    ("Chill", 2),
    ("DrumAndBass", 3),
    ("Drumstep", 4),
    ("Dubstep", 5),
    ("EDM", 6),
    ("Electronic", 7),
    ("ElectronicRock", 8),
    ("FutureBass", 9),
    ("FutureHouse", 10),
    ("GlitchHop", 11),
    ("Hardstyle", 12),
    ("House", 13),
    ("IndieDance", 14),
    ("MelodicDubstep", 15),
    ("MidtempoBass", 16),
    ("Phonk", 34),
    ("Trap", 17),
    ("TropicalHouse", 18),
    ("UKGarage", 19),
];

const MOODS: &[(&str, u32)] = &[
    ("Angry", 1),
    ("Chasing", 2),
    ("Dark", 3),
    ("Dreamy", 4),
    ("Epic", 5),
    ("Euphoric", 6),
    ("Fear", 7),
    ("Funny", 8),
    ("Glamorous", 9),
    ("Gloomy", 10),
    ("Happy", 11),
    ("Hopeful", 12),
    ("LaidBack", 13),
    ("Mysterious", 14),
    ("Peaceful", 15),
    ("Quirky", 16),
    ("Relaxing", 17),
    ("Restless", 18),
    ("Romantic", 19),
    ("Sad", 20),
    ("Scary", 21),
    ("Sexy", 22),
    ("Suspense", 23),
    ("Weird", 24),
];

pub fn default_genres() -> Enumeration {
    Enumeration::from_static(GENRES)
}

pub fn default_moods() -> Enumeration {
    Enumeration::from_static(MOODS)
}
