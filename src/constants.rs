pub const ALL_MOVIES_V1: &str = "/movieservice/v1/allMovies";
pub const MOVIE_V1: &str = "/movieservice/v1/movie";
pub const MOVIE_BY_NAME_V1: &str = "/movieservice/v1/movieName";
pub const MOVIE_BY_YEAR_V1: &str = "/movieservice/v1/movieYear";

pub const MOVIE_NAME_QUERY_PARAM: &str = "movie_name";
pub const YEAR_QUERY_PARAM: &str = "year";
