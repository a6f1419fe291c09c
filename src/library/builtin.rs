use super::model::Track;

const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Love Story x Golden Brown",
        "ilblu",
        "https://condemned-beige-te8zfwksnl.edgeone.app/love%20story%20x%20golden%20brown%20-%20cover%20(ilblu).mp3",
        "https://i.scdn.co/image/ab67616d00001e022ff8e7ddcedf9076522e8cd7",
        "3:20",
    ),
    (
        "Die With A Smile",
        "Lady Gaga, Bruno Mars",
        "https://influential-white-utj3j0xj3z.edgeone.app/Lady%20Gaga,%20Bruno%20Mars%20-%20Die%20With%20A%20Smile%20(Official%20Music%20Video).mp3",
        "https://images.genius.com/abe185baf2b9fd84ebb5d493ffe715b3.1000x1000x1.png",
        "3:35",
    ),
    (
        "cheri cheri lady",
        "Modern Talking",
        "https://moaning-indigo-a1f05wrd8c.edgeone.app/Cheri_Cheri_Lady.mp3",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQVV0SIVMXyjTpUiM39U9U9SkYJbP5EMpJx9kmg&s",
        "3:23",
    ),
    (
        "Ed Sheeran - Shape of You",
        "Ed Sheeran",
        "https://patient-red-nlbn3jtrtu.edgeone.app/Ed%20Sheeran%20-%20Shape%20of%20You%20(Official%20Music%20Video).mp3",
        "https://upload.wikimedia.org/wikipedia/en/b/b4/Shape_Of_You_%28Official_Single_Cover%29_by_Ed_Sheeran.png",
        "2:21",
    ),
    (
        "Let Me Down Slowly x Main Dhoondne Ko Zamaane Mein (Gravero Mashup)",
        "Gravero",
        "https://intact-fuchsia-tanizit5ua.edgeone.app/Let%20Me%20Down%20Slowly%20x%20Main%20Dhoondne%20Ko%20Zamaane%20Mein%20(Gravero%20Mashup)%20_%20Full%20Version.mp3",
        "https://i.ytimg.com/vi/wqUFuZyR-xA/maxresdefault.jpg",
        "3:46",
    ),
    (
        "Ranjheya Ve",
        "Zain Zohaib",
        "https://secret-amber-2uyqkkfbec.edgeone.app/Ranjheya%20Ve%20%20%20Zain%20Zohaib%20%20%20Yratta%20media.mp3",
        "https://i.ytimg.com/vi/MVvEUAymQFM/maxresdefault.jpg",
        "3:46",
    ),
];

/// The playlist shipped with the player, in author order.
pub fn builtin_playlist() -> Vec<Track> {
    BUILTIN
        .iter()
        .map(|&(title, artist, source, cover, duration)| Track {
            title: title.to_string(),
            artist: artist.to_string(),
            source: source.to_string(),
            cover: cover.to_string(),
            nominal_duration: duration.to_string(),
        })
        .collect()
}
