mod films_test;
mod helpers;
