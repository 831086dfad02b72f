//! GraphQL documents sent to the CMS
//!
//! Every document is static; variables are passed separately.

/// A named GraphQL query document
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub name: &'static str,
    pub document: &'static str,
}

/// Page size of the recent and similar post widgets
pub const WIDGET_LIMIT: usize = 3;

pub const POSTS: Query = Query {
    name: "GetPosts",
    document: r#"
query GetPosts {
  postsConnection {
    edges {
      node {
        id
        title
        author {
          id
          name
          photo {
            url
          }
          bio
        }
        createdAt
        slug
        excerpt
        featuredPost
        featuredImage {
          url
        }
        categories {
          id
          name
          slug
        }
      }
    }
  }
}
"#,
};

pub const POST_DETAILS: Query = Query {
    name: "GetPostDetails",
    document: r#"
query GetPostDetails($slug: String!) {
  post(where: { slug: $slug }) {
    id
    title
    author {
      id
      name
      photo {
        url
      }
      bio
    }
    createdAt
    slug
    excerpt
    featuredPost
    featuredImage {
      url
    }
    categories {
      id
      name
      slug
    }
    content {
      raw
    }
  }
}
"#,
};

pub const RECENT_POSTS: Query = Query {
    name: "GetRecentPosts",
    document: r#"
query GetRecentPosts {
  posts(orderBy: createdAt_ASC, last: 3) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
}
"#,
};

pub const SIMILAR_POSTS: Query = Query {
    name: "GetSimilarPosts",
    document: r#"
query GetSimilarPosts($slug: String!, $categories: [String!]) {
  posts(
    where: { slug_not: $slug, AND: { categories_some: { slug_in: $categories } } }
    last: 3
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
}
"#,
};

pub const CATEGORIES: Query = Query {
    name: "GetCategories",
    document: r#"
query GetCategories {
  categories {
    name
    slug
  }
}
"#,
};

pub const CATEGORY_POSTS: Query = Query {
    name: "GetCategoryPosts",
    document: r#"
query GetCategoryPosts($slug: String!) {
  postsConnection(where: { categories_some: { slug: $slug } }) {
    edges {
      node {
        id
        title
        author {
          id
          name
          photo {
            url
          }
          bio
        }
        createdAt
        slug
        excerpt
        featuredPost
        featuredImage {
          url
        }
        categories {
          id
          name
          slug
        }
      }
    }
  }
}
"#,
};

pub const COMMENTS: Query = Query {
    name: "GetComments",
    document: r#"
query GetComments($slug: String!) {
  comments(where: { post_every: { slug: $slug } }) {
    name
    createdAt
    comment
  }
}
"#,
};

pub const ADJACENT_POSTS: Query = Query {
    name: "GetAdjacentPosts",
    document: r#"
query GetAdjacentPosts($createdAt: DateTime!, $slug: String!) {
  next: posts(
    first: 1
    orderBy: createdAt_ASC
    where: { slug_not: $slug, AND: { createdAt_gte: $createdAt } }
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
  previous: posts(
    first: 1
    orderBy: createdAt_DESC
    where: { slug_not: $slug, AND: { createdAt_lte: $createdAt } }
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
}
"#,
};

pub const FEATURED_POSTS: Query = Query {
    name: "GetFeaturedPosts",
    document: r#"
query GetFeaturedPosts {
  posts(where: { featuredPost: true }) {
    author {
      name
      photo {
        url
      }
    }
    featuredImage {
      url
    }
    title
    slug
    createdAt
  }
}
"#,
};
