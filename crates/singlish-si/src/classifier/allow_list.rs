// Built-in foreign-word allow-list.
//
// English words, brand names, and greetings and function words of other
// romanized languages, all spelled entirely with the romanization alphabet.
// Without the list they would score as plausible Singlish.
// Entries are lower-case; lookup is case-insensitive.

use hashbrown::HashSet;

pub static BUILTIN_FOREIGN_WORDS: &[&str] = &[
    // -- Function words ----------------------------------------------------
    "the", "are", "was", "were", "have", "has", "had", "here", "there", "where",
    "one", "some", "come", "done", "gone", "none", "more", "before", "after",
    "she", "use", "see", "free", "sure", "then", "when", "again", "even",
    "open", "main", "can", "man", "ten", "nine", "five", "fine",
    "mine", "line", "time", "home", "game", "same", "name", "made", "make",
    "take", "like", "love", "live", "give", "late", "side", "ride", "inside",
    "people", "please", "sorry", "thanks", "thank", "hello", "okay", "bye",
    "yes", "not", "and", "but", "for", "from", "with", "this", "that",
    "what", "why", "who", "how", "all", "any", "will", "would", "should",
    "could", "about", "into", "only", "also", "just", "very", "well",
    // -- Chat and office vocabulary ----------------------------------------
    "meeting", "cancel", "comment", "message", "phone", "mobile", "office",
    "online", "offline", "video", "audio", "photo", "radio", "menu", "data",
    "file", "email", "mail", "link", "share", "send", "post", "update",
    "delete", "login", "logout", "password", "download", "upload",
    "team", "boss", "sir", "madam", "miss", "class", "exam", "lecture",
    "assignment", "deadline", "project", "report", "bank", "taxi", "bus",
    "train", "hotel", "party", "birthday", "movie", "song", "music",
    // -- Brands and services -----------------------------------------------
    "zoom", "whatsapp", "facebook", "google", "gmail", "youtube", "viber",
    "instagram", "tiktok", "netflix", "uber", "pickme", "dialog", "mobitel",
    "hutch", "airtel", "microsoft", "apple", "samsung", "huawei", "android",
    "iphone", "windows", "linux", "teams", "skype", "twitter", "telegram",
    "messenger", "yahoo", "amazon", "daraz", "keells", "cargills", "kfc",
    // -- Other romanized languages -----------------------------------------
    // Spanish
    "hola", "amigo", "amiga", "como", "estas", "esta", "bueno", "buenos",
    "buenas", "gracias", "adios", "senor", "donde", "pero", "mucho", "gusto",
    "tengo", "noches", "tardes",
    // Italian
    "bella", "bello", "prego", "buongiorno", "buonasera", "arrivederci",
    "signore", "signora", "amore", "molto", "bene", "allora", "andiamo",
    // Japanese
    "konnichiwa", "konbanwa", "arigato", "arigatou", "ohayo", "ohayou",
    "sayonara", "sayounara", "sumimasen", "gomen", "gomennasai", "watashi",
    "desu", "kawaii", "sugoi", "oishii",
    // Hindi
    "namaste", "kaise", "kaisa", "nahi", "nahin", "achha", "accha", "theek",
    "bahut", "haan", "kyun", "dhanyavad", "shukriya",
];

/// The built-in list as a set.
pub fn builtin() -> HashSet<String> {
    BUILTIN_FOREIGN_WORDS.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_lower_case_ascii() {
        for word in BUILTIN_FOREIGN_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "bad entry {word:?}"
            );
        }
    }

    #[test]
    fn contains_code_mixed_examples() {
        let set = builtin();
        for word in ["zoom", "meeting", "cancel", "whatsapp", "comment"] {
            assert!(set.contains(word), "missing {word:?}");
        }
    }

    #[test]
    fn contains_other_language_greetings() {
        let set = builtin();
        for word in ["konnichiwa", "hola", "amigo", "como", "estas", "bella", "namaste"] {
            assert!(set.contains(word), "missing {word:?}");
        }
    }

    #[test]
    fn entries_are_unique() {
        let set = builtin();
        assert_eq!(set.len(), BUILTIN_FOREIGN_WORDS.len());
    }

    #[test]
    fn contains_no_common_singlish() {
        let set = builtin();
        for word in [
            "eka", "karala", "kiyanna", "mama", "oya", "api", "hari", "ane", "para", "dan",
        ] {
            assert!(!set.contains(word), "unexpected {word:?}");
        }
    }
}
