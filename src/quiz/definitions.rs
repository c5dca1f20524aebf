//! Built-in media-literacy quiz
//!
//! The standing quiz on the home page. Article quizzes are supplied by
//! the content layer at runtime; this one ships with the engine.

use crate::quiz::question::QuizQuestion;

/// The five-question media-literacy quiz
pub fn media_literacy_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "Apa yang dimaksud dengan jurnalisme partisipatif?",
            vec![
                "Jurnalisme yang hanya dilakukan oleh wartawan profesional".into(),
                "Jurnalisme yang melibatkan masyarakat dalam pembuatan berita".into(),
                "Jurnalisme yang hanya membahas topik politik".into(),
                "Jurnalisme yang tidak memerlukan fakta".into(),
            ],
            1,
        )
        .with_explanation(
            "Jurnalisme partisipatif adalah konsep di mana masyarakat umum turut \
             berkontribusi dalam pembuatan dan penyebaran berita, bukan hanya \
             wartawan profesional.",
        ),
        QuizQuestion::new(
            "Mengapa penting untuk mengecek fakta sebelum membagikan berita?",
            vec![
                "Agar terlihat pintar".into(),
                "Untuk mendapatkan lebih banyak like".into(),
                "Untuk mencegah penyebaran informasi yang salah (hoaks)".into(),
                "Karena diwajibkan oleh hukum".into(),
            ],
            2,
        )
        .with_explanation(
            "Mengecek fakta sangat penting untuk mencegah penyebaran hoaks dan \
             memastikan informasi yang kita bagikan akurat dan dapat dipercaya.",
        ),
        QuizQuestion::new(
            "Apa itu clickbait dalam jurnalisme?",
            vec![
                "Judul berita yang menarik dan informatif".into(),
                "Teknik menulis berita yang objektif".into(),
                "Judul yang menyesatkan untuk mendapatkan klik".into(),
                "Cara mengedit foto berita".into(),
            ],
            2,
        )
        .with_explanation(
            "Clickbait adalah judul yang dirancang untuk menarik perhatian dan \
             mendorong orang mengklik, seringkali dengan cara yang menyesatkan \
             atau berlebihan.",
        ),
        QuizQuestion::new(
            "Apa prinsip 5W+1H dalam penulisan berita?",
            vec![
                "What, When, Where, Who, Why, How".into(),
                "Write, Wait, Watch, Work, Win, Help".into(),
                "Word, Website, Writer, World, Way, Hope".into(),
                "Wake, Walk, Want, Work, Wish, Happy".into(),
            ],
            0,
        )
        .with_explanation(
            "5W+1H adalah prinsip dasar penulisan berita: What (Apa), When \
             (Kapan), Where (Di mana), Who (Siapa), Why (Mengapa), dan How \
             (Bagaimana).",
        ),
        QuizQuestion::new(
            "Mengapa penting untuk mencantumkan sumber dalam artikel berita?",
            vec![
                "Untuk membuat artikel terlihat lebih panjang".into(),
                "Untuk menunjukkan kredibilitas dan memungkinkan pembaca melakukan verifikasi".into(),
                "Karena semua orang melakukannya".into(),
                "Untuk mengisi ruang kosong".into(),
            ],
            1,
        )
        .with_explanation(
            "Mencantumkan sumber sangat penting untuk menunjukkan kredibilitas \
             informasi dan memungkinkan pembaca memverifikasi fakta secara \
             independen.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::QuizKind;
    use crate::quiz::session::QuizSession;

    #[test]
    fn test_built_in_quiz_is_well_formed() {
        let questions = media_literacy_quiz();
        assert_eq!(questions.len(), 5);
        // Creation runs full validation
        assert!(QuizSession::new(QuizKind::MediaLiteracy, questions).is_ok());
    }
}
