//! Curated festival table, grouped by Gregorian year.
//!
//! Dates use the Devanagari month form `"<month> <day>, <year>"` parsed by
//! [`crate::festival::parse_festival_date`].

use crate::festival_types::FestivalCategory::{Generic, Major};
use crate::festival_types::FestivalEntry;

/// Every known festival, in table order.
pub static FESTIVALS: &[FestivalEntry] = &[
    // 2024
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2024", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 19, 2024", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 26, 2024", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 7, 2024", Generic),
    FestivalEntry::new("गांधी जयंती", "अक्टूबर 2, 2024", Generic),
    FestivalEntry::new("नवरात्रि", "अक्टूबर 3, 2024", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 12, 2024", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 1, 2024", Major),
    FestivalEntry::new("गुरु नानक जयंती", "नवंबर 15, 2024", Generic),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2024", Generic),

    // 2025
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2025", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2025", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2025", Generic),
    FestivalEntry::new("वसंत पंचमी", "फरवरी 3, 2025", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 26, 2025", Generic),
    FestivalEntry::new("होलिका दहन", "मार्च 13, 2025", Generic),
    FestivalEntry::new("होली", "मार्च 14, 2025", Generic),
    FestivalEntry::new("गुड़ी पड़वा", "मार्च 30, 2025", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 6, 2025", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 20, 2025", Generic),
    FestivalEntry::new("अक्षय तृतीया", "अप्रैल 30, 2025", Generic),
    FestivalEntry::new("बुद्ध पूर्णिमा", "मई 12, 2025", Generic),
    FestivalEntry::new("वट सावित्री व्रत", "मई 26, 2025", Generic),
    FestivalEntry::new("जगन्नाथ रथ यात्रा", "जून 26, 2025", Generic),
    FestivalEntry::new("गुरु पूर्णिमा", "जुलाई 11, 2025", Generic),
    FestivalEntry::new("नाग पंचमी", "अगस्त 5, 2025", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2025", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 19, 2025", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 26, 2025", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 7, 2025", Generic),
    FestivalEntry::new("ओणम", "सितंबर 7, 2025", Generic),
    FestivalEntry::new("अनंत चतुर्दशी", "सितंबर 7, 2025", Generic),
    FestivalEntry::new("नवरात्रि प्रारंभ", "सितंबर 22, 2025", Generic),
    FestivalEntry::new("गांधी जयंती", "अक्टूबर 2, 2025", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 1, 2025", Generic),
    FestivalEntry::new("शरद पूर्णिमा", "अक्टूबर 6, 2025", Generic),
    FestivalEntry::new("करवा चौथ", "अक्टूबर 10, 2025", Generic),
    FestivalEntry::new("धनतेरस", "अक्टूबर 20, 2025", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 21, 2025", Major),
    FestivalEntry::new("गोवर्धन पूजा", "अक्टूबर 22, 2025", Generic),
    FestivalEntry::new("भाई दूज", "अक्टूबर 23, 2025", Generic),
    FestivalEntry::new("छठ पूजा", "अक्टूबर 27, 2025", Generic),
    FestivalEntry::new("देवउठनी एकादशी", "नवंबर 2, 2025", Generic),
    FestivalEntry::new("गुरु नानक जयंती", "नवंबर 5, 2025", Generic),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2025", Generic),

    // 2030
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2030", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2030", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2030", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 22, 2030", Generic),
    FestivalEntry::new("होली", "मार्च 3, 2030", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 12, 2030", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 26, 2030", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2030", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 22, 2030", Generic),
    FestivalEntry::new("जन्माष्टमी", "सितंबर 2, 2030", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 20, 2030", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 8, 2030", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 27, 2030", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2030", Generic),

    // 2031
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2031", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2031", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2031", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 11, 2031", Generic),
    FestivalEntry::new("होली", "मार्च 21, 2031", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 1, 2031", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 15, 2031", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2031", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 11, 2031", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 22, 2031", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 9, 2031", Generic),
    FestivalEntry::new("दशहरा", "सितंबर 27, 2031", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 15, 2031", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2031", Generic),

    // 2032
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2032", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 15, 2032", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2032", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 28, 2032", Generic),
    FestivalEntry::new("होली", "मार्च 10, 2032", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 20, 2032", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 4, 2032", Generic),
    FestivalEntry::new("रक्षा बंधन", "जुलाई 30, 2032", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 10, 2032", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2032", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "अगस्त 28, 2032", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 15, 2032", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 3, 2032", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2032", Generic),

    // 2033
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2033", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2033", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2033", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 17, 2033", Generic),
    FestivalEntry::new("होली", "फरवरी 27, 2033", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 8, 2033", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 23, 2033", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2033", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 18, 2033", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 30, 2033", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 16, 2033", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 4, 2033", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 23, 2033", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2033", Generic),

    // 2034
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2034", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2034", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2034", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 7, 2034", Generic),
    FestivalEntry::new("होली", "मार्च 18, 2034", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 28, 2034", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 11, 2034", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2034", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 7, 2034", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 18, 2034", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 5, 2034", Generic),
    FestivalEntry::new("दशहरा", "सितंबर 23, 2034", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 11, 2034", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2034", Generic),

    // 2035
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2035", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2035", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2035", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 25, 2035", Generic),
    FestivalEntry::new("होली", "मार्च 7, 2035", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 16, 2035", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 30, 2035", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2035", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 27, 2035", Generic),
    FestivalEntry::new("जन्माष्टमी", "सितंबर 7, 2035", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 25, 2035", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 12, 2035", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 31, 2035", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2035", Generic),

    // 2036
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2036", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 15, 2036", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2036", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 14, 2036", Generic),
    FestivalEntry::new("होली", "मार्च 25, 2036", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 4, 2036", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 19, 2036", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2036", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 15, 2036", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 26, 2036", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 13, 2036", Generic),
    FestivalEntry::new("दशहरा", "सितंबर 30, 2036", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 18, 2036", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2036", Generic),

    // 2037
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2037", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2037", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2037", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 4, 2037", Generic),
    FestivalEntry::new("होली", "मार्च 15, 2037", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 25, 2037", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 8, 2037", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2037", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 4, 2037", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 16, 2037", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 2, 2037", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 19, 2037", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 7, 2037", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2037", Generic),

    // 2038
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2038", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2038", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2038", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 20, 2038", Generic),
    FestivalEntry::new("होली", "मार्च 4, 2038", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 13, 2038", Generic),
    FestivalEntry::new("हनुमान जयंती", "मार्च 28, 2038", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2038", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 23, 2038", Generic),
    FestivalEntry::new("जन्माष्टमी", "सितंबर 3, 2038", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 22, 2038", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 8, 2038", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 27, 2038", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2038", Generic),

    // 2039
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2039", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2039", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2039", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 10, 2039", Generic),
    FestivalEntry::new("होली", "मार्च 22, 2039", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 1, 2039", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 16, 2039", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2039", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 12, 2039", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 24, 2039", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 10, 2039", Generic),
    FestivalEntry::new("दशहरा", "सितंबर 26, 2039", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 15, 2039", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2039", Generic),

    // 2040
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2040", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 15, 2040", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2040", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 27, 2040", Generic),
    FestivalEntry::new("होली", "मार्च 11, 2040", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 20, 2040", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 4, 2040", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2040", Generic),
    FestivalEntry::new("रक्षा बंधन", "जुलाई 31, 2040", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 11, 2040", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "अगस्त 30, 2040", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 14, 2040", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 2, 2040", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2040", Generic),

    // 2041
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2041", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2041", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2041", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 15, 2041", Generic),
    FestivalEntry::new("होली", "मार्च 1, 2041", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 10, 2041", Generic),
    FestivalEntry::new("हनुमान जयंती", "मार्च 24, 2041", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2041", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 20, 2041", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 31, 2041", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 18, 2041", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 4, 2041", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 23, 2041", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2041", Generic),

    // 2042
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2042", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2042", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2042", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 6, 2042", Generic),
    FestivalEntry::new("होली", "मार्च 20, 2042", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 29, 2042", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 13, 2042", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2042", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 9, 2042", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 20, 2042", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 7, 2042", Generic),
    FestivalEntry::new("दशहरा", "सितंबर 23, 2042", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 11, 2042", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2042", Generic),

    // 2043
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2043", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2043", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2043", Generic),
    FestivalEntry::new("महा शिवरात्रि", "फरवरी 24, 2043", Generic),
    FestivalEntry::new("होली", "मार्च 9, 2043", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 18, 2043", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 2, 2043", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2043", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 28, 2043", Generic),
    FestivalEntry::new("जन्माष्टमी", "सितंबर 8, 2043", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 27, 2043", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 13, 2043", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 1, 2043", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2043", Generic),

    // 2044
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2044", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 15, 2044", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2044", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 13, 2044", Generic),
    FestivalEntry::new("होली", "मार्च 27, 2044", Generic),
    FestivalEntry::new("राम नवमी", "अप्रैल 5, 2044", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 20, 2044", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2044", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 16, 2044", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 27, 2044", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 15, 2044", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 1, 2044", Generic),
    FestivalEntry::new("दिवाली", "अक्टूबर 20, 2044", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2044", Generic),

    // 2045
    FestivalEntry::new("नव वर्ष", "जनवरी 1, 2045", Generic),
    FestivalEntry::new("मकर संक्रांति", "जनवरी 14, 2045", Generic),
    FestivalEntry::new("गणतंत्र दिवस", "जनवरी 26, 2045", Generic),
    FestivalEntry::new("महा शिवरात्रि", "मार्च 2, 2045", Generic),
    FestivalEntry::new("होली", "मार्च 16, 2045", Generic),
    FestivalEntry::new("राम नवमी", "मार्च 26, 2045", Generic),
    FestivalEntry::new("हनुमान जयंती", "अप्रैल 9, 2045", Generic),
    FestivalEntry::new("स्वतंत्रता दिवस", "अगस्त 15, 2045", Generic),
    FestivalEntry::new("रक्षा बंधन", "अगस्त 5, 2045", Generic),
    FestivalEntry::new("जन्माष्टमी", "अगस्त 17, 2045", Generic),
    FestivalEntry::new("गणेश चतुर्थी", "सितंबर 4, 2045", Generic),
    FestivalEntry::new("दशहरा", "अक्टूबर 20, 2045", Generic),
    FestivalEntry::new("दिवाली", "नवंबर 8, 2045", Major),
    FestivalEntry::new("क्रिसमस", "दिसंबर 25, 2045", Generic),
];
