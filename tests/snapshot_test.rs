use cowsay_rs::render;
use insta::assert_snapshot;

#[test]
fn test_render_single_row() {
    assert_snapshot!(render("Hello, World!", 40), @r"
     _______________
    < Hello, World! >
     ---------------
        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
    ");
}

#[test]
fn test_render_two_rows() {
    assert_snapshot!(render("Hello, World!", 5), @r"
     ________
    / Hello, \
    \ World! /
     --------
        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
    ");
}

#[test]
fn test_render_interior_rows() {
    assert_snapshot!(render("The quick brown fox jumps over the lazy dog", 10), @r"
     ____________
    / The quick  \
    | brown fox  |
    | jumps over |
    | the lazy   |
    \ dog        /
     ------------
        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
    ");
}
