//! Property tests for the tokenizer and the filter pipeline.

use proptest::prelude::*;
use wordsieve::prelude::*;

fn tokenize(text: &str, chunk_size: usize, max_word_length: usize) -> Vec<Word> {
    let tokenizer = StreamingTokenizer::with_config(TokenizerConfig {
        chunk_size,
        max_word_length,
    })
    .unwrap();
    collect_words(tokenizer.tokenize(Source::from_text(text))).unwrap()
}

fn apply(pipeline: &FilterPipeline, words: &[Word]) -> Vec<Word> {
    collect_words(pipeline.apply_words(words.to_vec()).unwrap()).unwrap()
}

fn pipeline(filters: &[FilterConfig]) -> FilterPipeline {
    FilterPipeline::new(filters.iter().map(|f| f.build().unwrap()).collect())
}

fn per_word_filter() -> impl Strategy<Value = FilterConfig> {
    prop_oneof![
        (0i64..6).prop_map(|min_length| FilterConfig::MinLength { min_length }),
        prop::char::range('a', 'z').prop_map(|letter| FilterConfig::ContainsLetter { letter }),
        Just(FilterConfig::VowelMiddle),
    ]
}

fn word_list() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec("[a-zA-Zé]{1,8}", 0..40)
        .prop_map(|words| words.into_iter().map(Word::from).collect())
}

proptest! {
    #[test]
    fn empty_pipeline_is_identity(words in word_list()) {
        prop_assert_eq!(apply(&FilterPipeline::empty(), &words), words);
    }

    #[test]
    fn survivor_set_is_order_independent(
        words in word_list(),
        filters in prop::collection::vec(per_word_filter(), 0..4),
    ) {
        let forward = pipeline(&filters);
        let reversed: Vec<FilterConfig> = filters.into_iter().rev().collect();
        let reversed = pipeline(&reversed);
        prop_assert_eq!(apply(&forward, &words), apply(&reversed, &words));
    }

    #[test]
    fn single_filter_is_idempotent(words in word_list(), filter in per_word_filter()) {
        let once = pipeline(&[filter.clone()]);
        let twice = pipeline(&[filter.clone(), filter]);
        prop_assert_eq!(apply(&once, &words), apply(&twice, &words));
    }

    #[test]
    fn survivors_are_an_ordered_subsequence(
        words in word_list(),
        filters in prop::collection::vec(per_word_filter(), 0..4),
    ) {
        let kept = apply(&pipeline(&filters), &words);
        let mut remaining = words.iter();
        for word in &kept {
            prop_assert!(remaining.any(|w| w == word));
            for filter in &filters {
                let single = apply(&pipeline(std::slice::from_ref(filter)), std::slice::from_ref(word));
                prop_assert_eq!(single.len(), 1);
            }
        }
    }

    #[test]
    fn oversized_words_split_exactly(
        c in prop::char::range('a', 'z'),
        len in 1usize..5000,
        max in 1usize..1200,
    ) {
        let word: String = std::iter::repeat_n(c, len).collect();
        let pieces = tokenize(&word, 8192, max);

        let joined: String = pieces.iter().map(|w| w.as_str()).collect();
        prop_assert_eq!(joined, word);
        let (last, full) = pieces.split_last().unwrap();
        prop_assert!(full.iter().all(|w| w.char_len() == max));
        prop_assert!(last.char_len() >= 1 && last.char_len() <= max);
    }

    #[test]
    fn chunk_size_does_not_change_words(
        text in "[a-zé😀 \t\n]{0,200}",
        chunk_size in 1usize..32,
    ) {
        let expected: Vec<Word> = text.split_whitespace().map(Word::from).collect();
        prop_assert_eq!(tokenize(&text, chunk_size, 1000), expected);
    }

    #[test]
    fn words_never_empty_or_contain_whitespace(text in "\\PC{0,200}") {
        for word in tokenize(&text, 7, 5) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.chars().any(char::is_whitespace));
        }
    }
}
