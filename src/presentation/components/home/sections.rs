//! Section composers
//!
//! Each function turns one part of the catalog into screen rows.
//! Card indices are catalog positions.

use super::{CardModel, MenuContext, ScreenRow, TapContext};
use crate::{
    domain::{
        catalog::{Catalog, HERO_INDEX, MIN_CATALOG_LEN},
        post::Post,
    },
    presentation::widgets::news_card::CardVariant,
};

/// The decorative search field.
pub fn search_section() -> Vec<ScreenRow> {
    vec![ScreenRow::SearchBar]
}

/// Hero card, the secondary articles and the "More" button.
pub fn top_section(catalog: &Catalog) -> Vec<ScreenRow> {
    let hero = ScreenRow::Card(hero_card(catalog.hero()));
    let articles = catalog
        .articles()
        .iter()
        .enumerate()
        .map(|(offset, post)| ScreenRow::Card(article_card(HERO_INDEX + 1 + offset, post)));

    std::iter::once(hero)
        .chain(articles)
        .chain(std::iter::once(ScreenRow::MoreButton))
        .collect()
}

/// Audio title with its "Play all" action, then the audio cards.
pub fn audio_section(catalog: &Catalog) -> Vec<ScreenRow> {
    let cards = (MIN_CATALOG_LEN..catalog.len()).map(|index| ScreenRow::Card(audio_card(index)));

    std::iter::once(ScreenRow::AudioTitle).chain(cards).collect()
}

fn hero_card(post: &Post) -> CardModel {
    CardModel {
        post_index: HERO_INDEX,
        variant: CardVariant::Hero,
        on_tap: Some(TapContext::card_tapped(&post.title)),
        on_menu: None,
    }
}

fn article_card(post_index: usize, post: &Post) -> CardModel {
    CardModel {
        post_index,
        variant: CardVariant::Article,
        on_tap: Some(TapContext::card_tapped(&post.title)),
        on_menu: Some(MenuContext { post_index }),
    }
}

fn audio_card(post_index: usize) -> CardModel {
    CardModel {
        post_index,
        variant: CardVariant::Audio,
        on_tap: None,
        on_menu: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::catalog::{sample_posts, CatalogError};

    #[fixture]
    #[allow(clippy::unwrap_used)]
    fn catalog() -> Catalog {
        Catalog::sample().unwrap()
    }

    fn card_indices(rows: &[ScreenRow]) -> Vec<usize> {
        rows.iter()
            .filter_map(|row| match row {
                ScreenRow::Card(card) => Some(card.post_index),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    fn test_top_section(catalog: Catalog) {
        let rows = top_section(&catalog);

        assert_eq!(card_indices(&rows), vec![0, 1, 2, 3]);
        assert_eq!(rows.last(), Some(&ScreenRow::MoreButton));
    }

    #[rstest]
    fn test_audio_section(catalog: Catalog) {
        let rows = audio_section(&catalog);

        assert_eq!(rows.first(), Some(&ScreenRow::AudioTitle));
        assert_eq!(card_indices(&rows), vec![4, 5, 6]);
    }

    #[test]
    fn test_extra_posts_land_in_audio() -> Result<(), CatalogError> {
        let mut posts = sample_posts();
        let mut extra = posts[6].clone();
        extra.id = "0c0ffee00001".to_string();
        posts.push(extra);

        let catalog = Catalog::new(posts)?;
        assert_eq!(card_indices(&audio_section(&catalog)), vec![4, 5, 6, 7]);
        Ok(())
    }

    #[test]
    fn test_minimum_catalog_has_empty_audio_list() -> Result<(), CatalogError> {
        let catalog = Catalog::new(sample_posts().into_iter().take(4).collect())?;
        assert_eq!(audio_section(&catalog), vec![ScreenRow::AudioTitle]);
        Ok(())
    }

    #[rstest]
    fn test_tap_contexts(catalog: Catalog) {
        let hero = hero_card(catalog.hero());
        let article = article_card(1, &catalog.articles()[0]);
        let audio = audio_card(4);

        assert_eq!(
            hero.on_tap,
            Some(TapContext {
                title: catalog.hero().title.clone(),
                body: "Card Tapped".to_string(),
            })
        );
        assert_eq!(
            article.on_tap.map(|tap| tap.title),
            Some(catalog.articles()[0].title.clone())
        );
        assert_eq!(article.on_menu, Some(MenuContext { post_index: 1 }));
        assert_eq!(audio.on_tap, None);
        assert_eq!(audio.on_menu, None);
    }
}
