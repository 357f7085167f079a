use crate::atomic::Atomic;
use crate::parser::Parser;
use std::ops::ControlFlow;

/// An ordered collection of parsers that all produce the same output type
///
/// Implemented for tuples of up to 12 parsers (which may be of different
/// types), for arrays and for `Vec`s. Used by `sequence` and `or`.
pub trait ParserList<'code, T: Atomic> {
    type Output;

    /// Visit each parser in order until `visit` breaks
    fn for_each_parser<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a dyn Parser<'code, T, Output = Self::Output>) -> ControlFlow<()>,
    );

    fn parser_count(&self) -> usize;
}

impl<'code, T, P> ParserList<'code, T> for Vec<P>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn for_each_parser<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a dyn Parser<'code, T, Output = Self::Output>) -> ControlFlow<()>,
    ) {
        self.as_slice().for_each_parser(visit)
    }

    fn parser_count(&self) -> usize {
        self.len()
    }
}

impl<'code, T, P, const N: usize> ParserList<'code, T> for [P; N]
where
    T: Atomic,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn for_each_parser<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a dyn Parser<'code, T, Output = Self::Output>) -> ControlFlow<()>,
    ) {
        self.as_slice().for_each_parser(visit)
    }

    fn parser_count(&self) -> usize {
        N
    }
}

impl<'code, T, P> ParserList<'code, T> for [P]
where
    T: Atomic,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn for_each_parser<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a dyn Parser<'code, T, Output = Self::Output>) -> ControlFlow<()>,
    ) {
        for parser in self {
            if visit(parser).is_break() {
                return;
            }
        }
    }

    fn parser_count(&self) -> usize {
        self.len()
    }
}

macro_rules! impl_parser_list_for_tuple {
    ($count:expr; $($name:ident $index:tt),+) => {
        impl<'code, T, O, $($name),+> ParserList<'code, T> for ($($name,)+)
        where
            T: Atomic,
            $($name: Parser<'code, T, Output = O>,)+
        {
            type Output = O;

            fn for_each_parser<'a>(
                &'a self,
                visit: &mut dyn FnMut(&'a dyn Parser<'code, T, Output = O>) -> ControlFlow<()>,
            ) {
                $(
                    if visit(&self.$index).is_break() {
                        return;
                    }
                )+
            }

            fn parser_count(&self) -> usize {
                $count
            }
        }
    };
}

impl_parser_list_for_tuple!(1; A 0);
impl_parser_list_for_tuple!(2; A 0, B 1);
impl_parser_list_for_tuple!(3; A 0, B 1, C 2);
impl_parser_list_for_tuple!(4; A 0, B 1, C 2, D 3);
impl_parser_list_for_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_parser_list_for_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_parser_list_for_tuple!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_parser_list_for_tuple!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_parser_list_for_tuple!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_parser_list_for_tuple!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_parser_list_for_tuple!(11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_parser_list_for_tuple!(12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anything::{anything, nothing};
    use crate::tag::tag_str;

    fn names<'code, L: ParserList<'code, char>>(list: &L) -> Vec<String> {
        let mut names = Vec::new();
        list.for_each_parser(&mut |parser| {
            names.push(parser.name().into_owned());
            ControlFlow::Continue(())
        });
        names
    }

    #[test]
    fn test_tuple_visits_in_order() {
        let list = (tag_str("A", "a"), tag_str("B", "b"), tag_str("C", "c"));
        assert_eq!(names(&list), vec!["A", "B", "C"]);
        assert_eq!(list.parser_count(), 3);
    }

    #[test]
    fn test_visit_stops_on_break() {
        let list = (tag_str("A", "a"), tag_str("B", "b"), tag_str("C", "c"));
        let mut seen = 0;
        list.for_each_parser(&mut |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_vec_and_array() {
        let list = vec![tag_str("X", "x"), tag_str("Y", "y")];
        assert_eq!(names(&list), vec!["X", "Y"]);

        let array = [anything::<char>(), anything()];
        assert_eq!(names(&array), vec!["ANYTHING", "ANYTHING"]);
        assert_eq!(array.parser_count(), 2);
    }

    #[test]
    fn test_single_element_tuple() {
        let list = (nothing::<char>(),);
        assert_eq!(names(&list), vec!["NOTHING"]);
    }
}
