use prompta::Recommender;

#[derive(Clone)]
pub struct ApiState {
    pub recommender: Recommender,
}
