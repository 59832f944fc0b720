//! Built-in word lists backing the default collaborators
//!
//! English only. Lists are lowercase; callers lowercase before lookup.

use std::collections::{HashMap, HashSet};
use lazy_static::lazy_static;

lazy_static! {
    // =========================================================================
    // Stopwords (standard English list)
    // =========================================================================
    pub static ref STOPWORDS: HashSet<&'static str> = [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
        "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
        "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
        "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
        "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
        "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above", "below",
        "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
        "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
        "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
        "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
        "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
        "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
        "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
        "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    ].into_iter().collect();

    // =========================================================================
    // Sentiment valence (-4.0 .. 4.0)
    // =========================================================================
    pub static ref VALENCE: HashMap<&'static str, f64> = [
        // positive
        ("good", 1.9), ("great", 3.1), ("awesome", 3.1), ("amazing", 2.8),
        ("excellent", 3.2), ("fantastic", 2.6), ("wonderful", 2.7), ("love", 3.2),
        ("loved", 2.9), ("lovely", 2.8), ("like", 1.5), ("liked", 1.8), ("nice", 1.8),
        ("happy", 2.7), ("glad", 2.0), ("fun", 2.3), ("funny", 1.9), ("cool", 1.3),
        ("best", 3.2), ("better", 1.9), ("beautiful", 2.9), ("cute", 2.0),
        ("thanks", 1.9), ("thank", 1.5), ("thankful", 2.7), ("grateful", 2.0),
        ("yes", 1.7), ("yay", 2.4), ("lol", 1.8), ("haha", 2.0), ("hahaha", 2.6),
        ("lmao", 2.0), ("congrats", 2.4), ("congratulations", 2.9), ("win", 2.8),
        ("won", 2.7), ("winner", 2.8), ("joy", 2.8), ("merry", 2.5), ("blessed", 2.9),
        ("bless", 1.8), ("care", 2.2), ("sweet", 2.0), ("friend", 2.2),
        ("friends", 2.1), ("perfect", 2.7), ("proud", 2.1), ("excited", 1.4),
        ("exciting", 2.2), ("enjoy", 2.2), ("enjoyed", 2.3), ("hope", 1.9),
        ("hopefully", 1.7), ("welcome", 2.0), ("wow", 2.8), ("smart", 1.7),
        ("brilliant", 2.8), ("safe", 1.9), ("okay", 0.9), ("ok", 1.2), ("agree", 1.5),
        ("kind", 2.4), ("support", 1.7), ("peace", 2.5), ("celebrate", 2.7),
        ("gift", 1.9), ("free", 2.3), ("laugh", 2.6), ("smile", 1.5), ("rich", 2.6),
        ("pretty", 2.2), ("gg", 1.2), ("legit", 1.3), ("goat", 1.5), ("fire", 1.0),
        ("slay", 1.6), ("based", 0.8), ("bro", 0.5),
        // negative
        ("bad", -2.5), ("worse", -2.1), ("worst", -3.1), ("hate", -2.7),
        ("hated", -3.2), ("sad", -2.1), ("angry", -2.3), ("mad", -2.2),
        ("terrible", -2.1), ("awful", -2.0), ("horrible", -2.5), ("ugly", -2.3),
        ("stupid", -2.4), ("dumb", -2.3), ("idiot", -2.3), ("boring", -1.3),
        ("annoying", -1.7), ("annoyed", -1.6), ("sorry", -0.3), ("sick", -1.7),
        ("tired", -1.9), ("cry", -2.1), ("crying", -2.1), ("hurt", -2.4),
        ("pain", -2.3), ("fail", -2.5), ("failed", -2.3), ("lost", -1.3),
        ("lose", -1.7), ("kill", -3.7), ("dead", -3.3), ("die", -2.9), ("no", -1.2),
        ("wrong", -2.1), ("problem", -1.7), ("problems", -1.7), ("fear", -2.2),
        ("scared", -1.9), ("worried", -1.2), ("worry", -1.9), ("stress", -1.8),
        ("stressed", -1.4), ("ugh", -1.8), ("damn", -1.7), ("shit", -2.6),
        ("fuck", -2.5), ("wtf", -2.8), ("sucks", -1.5), ("suck", -1.9),
        ("lonely", -2.0), ("alone", -1.0), ("broke", -1.8), ("late", -0.4),
        ("busy", -0.2), ("forgot", -1.2), ("miss", -0.6), ("missed", -1.2),
        ("cringe", -1.7), ("mid", -0.6), ("trash", -1.6), ("lame", -1.8),
        ("bored", -1.1), ("disappointed", -1.9), ("upset", -1.6), ("fight", -1.6),
        ("war", -2.9), ("enemy", -2.5), ("hell", -3.6), ("blame", -1.4),
        ("fault", -1.7), ("rip", -1.6),
    ].into_iter().collect();

    /// Intensity modifiers: positive boost, negative dampen
    pub static ref BOOSTERS: HashMap<&'static str, f64> = [
        ("very", 0.293), ("really", 0.293), ("so", 0.293), ("extremely", 0.293),
        ("super", 0.293), ("totally", 0.293), ("absolutely", 0.293), ("too", 0.293),
        ("incredibly", 0.293), ("hella", 0.293), ("mad", 0.293), ("most", 0.293),
        ("kinda", -0.293), ("somewhat", -0.293), ("slightly", -0.293),
        ("barely", -0.293), ("hardly", -0.293), ("sort", -0.293), ("little", -0.293),
    ].into_iter().collect();

    pub static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor",
        "cannot", "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt",
        "didn't", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent",
        "weren't", "wont", "won't", "wouldnt", "wouldn't", "shouldnt", "shouldn't",
        "aint", "ain't", "without",
    ].into_iter().collect();

    // =========================================================================
    // Familiar words (Dale-Chall style easy-word list, common core)
    // =========================================================================
    pub static ref FAMILIAR_WORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "all", "also", "always", "am", "an",
        "and", "animal", "another", "answer", "any", "are", "around", "as", "ask",
        "at", "away", "baby", "back", "bad", "ball", "be", "beautiful", "because",
        "bed", "been", "before", "began", "begin", "being", "best", "better", "big",
        "bird", "birthday", "black", "blue", "boat", "book", "both", "box", "boy",
        "bring", "brother", "brown", "but", "buy", "by", "call", "came", "can",
        "car", "care", "carry", "cat", "change", "child", "children", "christmas",
        "city", "class", "clean", "close", "cold", "come", "could", "cut", "day",
        "did", "do", "does", "dog", "done", "door", "down", "draw", "drink", "eat",
        "end", "enough", "even", "every", "eye", "face", "fall", "family", "far",
        "fast", "father", "feel", "find", "fine", "fire", "first", "fish", "five",
        "fly", "food", "for", "found", "four", "friend", "from", "full", "fun",
        "funny", "game", "gave", "get", "girl", "give", "go", "goes", "going",
        "good", "got", "great", "green", "grow", "had", "hand", "happy", "hard",
        "has", "have", "he", "head", "hear", "help", "her", "here", "hey", "hi",
        "him", "his", "hold", "home", "hope", "hot", "house", "how", "i", "if", "in",
        "into", "is", "it", "its", "jump", "just", "keep", "kind", "knew", "know",
        "last", "late", "laugh", "learn", "leave", "let", "letter", "life", "light",
        "like", "little", "live", "long", "look", "lot", "love", "made", "make",
        "man", "many", "may", "me", "mean", "men", "might", "money", "more",
        "morning", "most", "mother", "much", "must", "my", "name", "need", "never",
        "new", "next", "nice", "night", "no", "not", "now", "of", "off", "oh", "old",
        "on", "once", "one", "only", "open", "or", "other", "our", "out", "over",
        "own", "paper", "party", "people", "person", "place", "play", "please",
        "pretty", "put", "ran", "read", "ready", "red", "right", "room", "run",
        "said", "same", "saw", "say", "school", "see", "seem", "send", "sent",
        "she", "should", "show", "sing", "sister", "sit", "sleep", "small", "so",
        "some", "something", "song", "soon", "sorry", "start", "stay", "still",
        "stop", "story", "sure", "take", "talk", "tell", "ten", "thank", "thanks",
        "that", "the", "their", "them", "then", "there", "these", "they", "thing",
        "think", "this", "those", "thought", "three", "time", "to", "today",
        "together", "told", "tomorrow", "too", "took", "tree", "try", "two", "under",
        "up", "upon", "us", "use", "very", "walk", "want", "warm", "was", "watch",
        "water", "way", "we", "week", "well", "went", "were", "what", "when",
        "where", "which", "white", "who", "why", "will", "wish", "with", "without",
        "word", "work", "would", "write", "yes", "yesterday", "yet", "you", "young",
        "your",
    ].into_iter().collect();

    // =========================================================================
    // Closed-class and frequent open-class words for the tagger
    // =========================================================================
    pub static ref DETERMINERS: HashSet<&'static str> = [
        "a", "an", "the", "this", "that", "these", "those", "every", "each", "some",
        "any", "no", "another", "all", "both", "either", "neither",
    ].into_iter().collect();

    pub static ref PRONOUNS: HashSet<&'static str> = [
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they",
        "them", "myself", "yourself", "himself", "herself", "itself", "ourselves",
        "themselves", "mine", "yours", "hers", "ours", "theirs",
    ].into_iter().collect();

    pub static ref POSSESSIVES: HashSet<&'static str> = [
        "my", "your", "his", "its", "our", "their",
    ].into_iter().collect();

    pub static ref PREPOSITIONS: HashSet<&'static str> = [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "from", "up",
        "down", "of", "off", "over", "under", "since", "until", "while", "because",
        "if", "than", "like", "as", "near", "without", "within", "around",
    ].into_iter().collect();

    pub static ref CONJUNCTIONS: HashSet<&'static str> = [
        "and", "but", "or", "nor", "yet", "so",
    ].into_iter().collect();

    pub static ref MODALS: HashSet<&'static str> = [
        "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    ].into_iter().collect();

    pub static ref WH_WORDS: HashSet<&'static str> = [
        "what", "which", "who", "whom", "whose", "when", "where", "why", "how",
    ].into_iter().collect();

    pub static ref INTERJECTIONS: HashSet<&'static str> = [
        "uh", "um", "er", "ah", "oh", "wow", "hmm", "huh", "lol", "lmao", "haha",
        "hahaha", "yay", "ugh", "hey", "hi", "hello", "yes", "yeah", "yep", "nah",
        "ok", "okay",
    ].into_iter().collect();

    /// Base-form verbs (VB) and their irregular past forms (VBD)
    pub static ref VERBS: HashMap<&'static str, &'static str> = [
        ("be", "VB"), ("is", "VBZ"), ("am", "VBP"), ("are", "VBP"), ("was", "VBD"),
        ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"),
        ("has", "VBZ"), ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"),
        ("did", "VBD"), ("go", "VB"), ("went", "VBD"), ("gone", "VBN"),
        ("get", "VB"), ("got", "VBD"), ("make", "VB"), ("made", "VBD"),
        ("know", "VB"), ("knew", "VBD"), ("think", "VB"), ("thought", "VBD"),
        ("take", "VB"), ("took", "VBD"), ("see", "VB"), ("saw", "VBD"),
        ("come", "VB"), ("came", "VBD"), ("want", "VB"), ("look", "VB"),
        ("use", "VB"), ("find", "VB"), ("found", "VBD"), ("give", "VB"),
        ("gave", "VBD"), ("tell", "VB"), ("told", "VBD"), ("say", "VB"),
        ("said", "VBD"), ("work", "VB"), ("call", "VB"), ("try", "VB"),
        ("ask", "VB"), ("need", "VB"), ("feel", "VB"), ("felt", "VBD"),
        ("leave", "VB"), ("left", "VBD"), ("put", "VB"), ("mean", "VB"),
        ("meant", "VBD"), ("keep", "VB"), ("kept", "VBD"), ("let", "VB"),
        ("begin", "VB"), ("began", "VBD"), ("help", "VB"), ("talk", "VB"),
        ("play", "VB"), ("run", "VB"), ("ran", "VBD"), ("eat", "VB"),
        ("ate", "VBD"), ("sleep", "VB"), ("slept", "VBD"), ("send", "VB"),
        ("sent", "VBD"), ("buy", "VB"), ("bought", "VBD"), ("wait", "VB"),
        ("love", "VBP"), ("hate", "VBP"), ("like", "VBP"), ("forgot", "VBD"),
        ("forget", "VB"), ("bring", "VB"), ("brought", "VBD"), ("win", "VB"),
        ("won", "VBD"), ("lose", "VB"), ("lost", "VBD"), ("hope", "VBP"),
        ("guess", "VBP"), ("read", "VB"), ("write", "VB"), ("wrote", "VBD"),
    ].into_iter().collect();

    pub static ref ADJECTIVES: HashSet<&'static str> = [
        "good", "great", "bad", "big", "small", "new", "old", "nice", "happy", "sad",
        "funny", "cool", "best", "better", "worse", "worst", "late", "busy", "real",
        "sure", "right", "wrong", "hard", "easy", "long", "short", "high", "low",
        "free", "full", "sick", "tired", "cute", "pretty", "ugly", "dumb", "smart",
        "merry", "awesome", "amazing", "sweet", "hot", "cold", "early", "ready",
        "sorry", "glad", "mad", "crazy", "weird", "same", "different", "last",
        "next", "whole", "little", "true", "fine", "perfect", "lovely", "horrible",
        "terrible", "fantastic", "wonderful", "beautiful", "boring", "important",
    ].into_iter().collect();

    pub static ref ADVERBS: HashSet<&'static str> = [
        "not", "very", "really", "just", "too", "also", "now", "then", "here",
        "there", "always", "never", "often", "still", "already", "again", "soon",
        "maybe", "even", "only", "almost", "quite", "ever", "today", "tomorrow",
        "tonight", "yesterday", "later", "actually", "literally", "probably",
    ].into_iter().collect();
}
