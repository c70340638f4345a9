use crate::common::arb_notebook;
use proptest::prelude::*;
use rmd_babel::format::Format;
use rmd_babel::formats::spin::SpinFormat;

proptest! {
    // Unlike the fenced dialect, adjacent code runs without a directive merge
    // into one cell, so only the rendered text is compared.
    #[test]
    fn rerender_reaches_fixed_point(nb in arb_notebook()) {
        let format = SpinFormat::default();

        let first = format.serialize(&nb).unwrap();
        let second = format.serialize(&format.parse(&first).unwrap()).unwrap();
        let third = format.serialize(&format.parse(&second).unwrap()).unwrap();

        prop_assert_eq!(second.trim_end_matches('\n'), first.trim_end_matches('\n'));
        prop_assert_eq!(third, second);
    }
}
