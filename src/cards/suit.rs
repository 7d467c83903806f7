/// Card suit as the table server spells it: `♥ ♦ ♣ ♠`.
///
/// The ordering (H < D < C < S) follows the server's deck order and carries
/// no game meaning on this side of the wire.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    H = 0,
    D = 1,
    C = 2,
    S = 3,
}

impl Suit {
    /// All four suits in deck order.
    pub const fn all() -> [Suit; 4] {
        [Suit::H, Suit::D, Suit::C, Suit::S]
    }
    /// Unicode symbol, which is also the wire form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::H => "♥",
            Suit::D => "♦",
            Suit::C => "♣",
            Suit::S => "♠",
        }
    }
    /// Hearts and diamonds render red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::H | Suit::D)
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "♥" => Ok(Suit::H),
            "d" | "♦" => Ok(Suit::D),
            "c" | "♣" => Ok(Suit::C),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}
impl TryFrom<String> for Suit {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Suit> for String {
    fn from(s: Suit) -> String {
        s.symbol().to_string()
    }
}

impl serde::Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}
impl<'de> serde::Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
