/// Curated, domain-agnostic prompts eligible for recommendation. Compiled in;
/// never mutated at runtime.
const HIGH_POTENTIAL_PROMPTS: [&str; 106] = [
    "Best practices for user experience design",
    "How to optimize website performance",
    "Effective content marketing strategies",
    "Mobile-first design principles",
    "SEO optimization techniques",
    "Customer retention strategies",
    "A/B testing methodologies",
    "Conversion rate optimization",
    "Social media engagement tactics",
    "Email marketing best practices",
    "Data analytics and insights",
    "Brand identity development",
    "User interface design trends",
    "Customer feedback collection methods",
    "Product launch strategies",
    "Digital marketing automation",
    "Website accessibility standards",
    "E-commerce optimization",
    "Content creation workflows",
    "Lead generation techniques",
    "Customer journey mapping",
    "Competitive analysis methods",
    "Growth hacking strategies",
    "User onboarding optimization",
    "Cross-platform integration",
    "Performance monitoring tools",
    "Security best practices",
    "API design principles",
    "Database optimization",
    "Cloud infrastructure setup",
    "DevOps implementation",
    "Agile development methodologies",
    "Code review processes",
    "Testing automation strategies",
    "Documentation best practices",
    "Team collaboration tools",
    "Project management techniques",
    "Quality assurance processes",
    "Continuous integration setup",
    "Deployment strategies",
    "Monitoring and alerting",
    "Scalability planning",
    "Backup and recovery",
    "Incident response procedures",
    "Technical debt management",
    "Code refactoring techniques",
    "Performance profiling",
    "Security vulnerability assessment",
    "User authentication systems",
    "Data privacy compliance",
    "GDPR implementation",
    "Cookie policy management",
    "Terms of service optimization",
    "Privacy policy creation",
    "Legal compliance checking",
    "Risk assessment procedures",
    "Business continuity planning",
    "Disaster recovery strategies",
    "Vendor management processes",
    "Contract negotiation tactics",
    "Budget planning methods",
    "Financial forecasting",
    "Revenue optimization",
    "Cost reduction strategies",
    "Profit margin analysis",
    "Investment decision making",
    "Market research techniques",
    "Customer segmentation",
    "Persona development",
    "Value proposition design",
    "Pricing strategy optimization",
    "Sales funnel optimization",
    "Customer support automation",
    "Help desk implementation",
    "Knowledge base creation",
    "FAQ optimization",
    "Chatbot development",
    "Live chat integration",
    "Community building strategies",
    "User-generated content",
    "Influencer marketing",
    "Partnership development",
    "Affiliate program setup",
    "Referral system design",
    "Loyalty program creation",
    "Reward system implementation",
    "Gamification strategies",
    "User engagement metrics",
    "Retention rate optimization",
    "Churn reduction techniques",
    "Customer lifetime value",
    "Revenue per user optimization",
    "Market penetration strategies",
    "Brand awareness campaigns",
    "Thought leadership content",
    "Industry trend analysis",
    "Innovation management",
    "Technology adoption",
    "Digital transformation",
    "Process automation",
    "Workflow optimization",
    "Resource allocation",
    "Time management strategies",
    "Productivity enhancement",
    "Remote work optimization",
    "Team building activities",
];

/// An injected, immutable, ordered list of candidate prompt strings. Order is
/// insertion order and does not affect ranking.
#[derive(Clone, Debug)]
pub struct CandidatePool {
    prompts: Vec<String>,
}

impl CandidatePool {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in pool of high-potential business and technical prompts.
    pub fn high_potential() -> Self {
        Self::new(HIGH_POTENTIAL_PROMPTS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::high_potential()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn built_in_pool_has_distinct_entries() {
        let pool = CandidatePool::high_potential();
        let normalized: HashSet<String> =
            pool.iter().map(|p| p.trim().to_lowercase()).collect();
        assert_eq!(normalized.len(), pool.len());
    }

    #[test]
    fn custom_pools_preserve_insertion_order() {
        let pool = CandidatePool::new(["b", "a", "c"]);
        let entries: Vec<&str> = pool.iter().collect();
        assert_eq!(entries, vec!["b", "a", "c"]);
    }
}
