//! Starter deck used when nothing has been saved yet

use super::model::Card;

const SEED: [(&str, &str); 10] = [
    ("Apple", "사과"),
    ("안녕하세요", "Hello"),
    ("Book", "책"),
    ("고맙습니다", "Thank you"),
    ("Computer", "컴퓨터"),
    ("죄송합니다", "Sorry"),
    ("Water", "물"),
    ("사랑합니다", "I love you"),
    ("Friend", "친구"),
    ("화장실이 어디예요?", "Where is the restroom?"),
];

/// Build the ten starter cards, none favorited
pub fn seed_cards() -> Vec<Card> {
    SEED.iter().map(|(front, back)| Card::new(*front, *back)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_ten_unfavorited_cards() {
        let cards = seed_cards();
        assert_eq!(cards.len(), 10);
        assert!(cards.iter().all(|c| !c.is_favorite));
        assert_eq!(cards[0].front, "Apple");
        assert_eq!(cards[9].back, "Where is the restroom?");
    }
}
