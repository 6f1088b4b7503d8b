//! Posts (minds, deals, articles, questions) and their responses.
endpoints! {
	/// Endpoints of the `/post` resource.
	POST_ENDPOINTS;

	Anonymous Get "/post/get_one" => post_get_one / POST_GET_ONE ["post_id"] "GetOne";
	Anonymous Get "/post/likes" => post_likes / POST_LIKES ["post_id"] "Likes";

	/// Responses written under a post.
	Anonymous Get "/post/response" => post_responses / POST_RESPONSES ["post_id"] "Responses";

	Anonymous Get "/post/is_post_liked" => post_is_post_liked / POST_IS_POST_LIKED ["post_id", "user_id"] "IsPostLiked";
	Anonymous Get "/post/is_response_liked" => post_is_response_liked / POST_IS_RESPONSE_LIKED ["resp_id", "user_id"] "IsPostResponse";
	Anonymous Get "/post/popular_articles" => post_popular_articles / POST_POPULAR_ARTICLES [] "PopularArticles";
	Anonymous Get "/post/popular_photos" => post_popular_photos / POST_POPULAR_PHOTOS [] "PopularPhotos";
	Anonymous Get "/post/popular_videos" => post_popular_videos / POST_POPULAR_VIDEOS [] "PopularVideos";

	/// Posts a short "mind". `origin_id` is the channel or user stream the
	/// post is written to.
	Authenticated Post "/post/write_mind" => post_write_mind / POST_WRITE_MIND ["message", "origin_id"] "WriteMind";

	/// Posts a deal offer.
	Authenticated Post "/post/create_deal" => post_create_deal / POST_CREATE_DEAL
		["name", "desc", "currency", "price", "origin_id", "locale", "location", "condition"] "CreateDeal";

	Authenticated Post "/post/create_article" => post_create_article / POST_CREATE_ARTICLE ["title", "message", "origin_id"] "CreateArticle";
	Authenticated Post "/post/create_ask" => post_create_ask / POST_CREATE_ASK ["subject", "message", "origin_id"] "CreateAsk";
	Authenticated Post "/post/write_response" => post_write_response / POST_WRITE_RESPONSE ["post_id", "origin_id", "message"] "PostWriteResponse";
	Authenticated Post "/post/like_response" => post_like_response / POST_LIKE_RESPONSE ["id"] "LikeResponse";
	Authenticated Post "/post/unlike_response" => post_unlike_response / POST_UNLIKE_RESPONSE ["id"] "UnlikeResponse";

	/// Answers a question created with [`post_create_ask`](crate::ApiClient::post_create_ask).
	Authenticated Post "/post/write_answer" => post_write_answer / POST_WRITE_ANSWER ["ask_id", "origin_id", "message"] "PostWriteAnswer";

	Authenticated Post "/post/like_answer" => post_like_answer / POST_LIKE_ANSWER ["answer_id"] "LikeAnswer";
	Authenticated Post "/post/unlike_answer" => post_unlike_answer / POST_UNLIKE_ANSWER ["answer_id"] "UnlikeAnswer";
	Authenticated Post "/post/like_post" => post_like_post / POST_LIKE_POST ["post_id"] "LikePost";
	Authenticated Post "/post/unlike_post" => post_unlike_post / POST_UNLIKE_POST ["post_id"] "UnlikePost";
	Authenticated Post "/post/hide_post" => post_hide_post / POST_HIDE_POST ["post_id"] "HidePost";
	Authenticated Post "/post/remove_post" => post_remove_post / POST_REMOVE_POST ["post_id"] "RemovePost";

	/// Re-shares a post to the supporters of the authorizing user.
	Authenticated Post "/post/shout" => post_shout / POST_SHOUT ["post_id"] "Shout";
}
